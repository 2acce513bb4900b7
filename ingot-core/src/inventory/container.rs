//! Container trait for item storage.

use ingot_registry::item_stack::ItemStack;

/// A trait for objects that can store items in slots.
///
/// This is the base abstraction for anything that holds items: chests,
/// dispensers, hoppers, etc. Composed view layouts read structural metadata
/// (`capacity`, `grid_size`) while building and delegate slot reads to the
/// real container afterwards.
pub trait Container: Send + Sync {
    /// Returns the number of slots in this container.
    fn capacity(&self) -> usize;

    /// Returns the 2D dimensions as `(columns, rows)` if this container is
    /// laid out as a grid.
    fn grid_size(&self) -> Option<(usize, usize)> {
        None
    }

    /// Returns true if all slots are empty.
    fn is_empty(&self) -> bool {
        for i in 0..self.capacity() {
            if !self.get_item(i).is_empty() {
                return false;
            }
        }
        true
    }

    /// Gets the item in the given slot.
    fn get_item(&self, slot: usize) -> &ItemStack;

    /// Sets the item in the given slot.
    fn set_item(&mut self, slot: usize, item: ItemStack);

    /// Called when the container contents change.
    fn set_changed(&mut self);

    /// Clears all items from this container.
    fn clear(&mut self) {
        for i in 0..self.capacity() {
            self.set_item(i, ItemStack::empty());
        }
    }
}
