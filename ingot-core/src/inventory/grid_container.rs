//! A grid-shaped container implementation.

use ingot_registry::item_stack::ItemStack;

use super::Container;

/// A container whose slots are laid out as a 2D grid, row-major.
///
/// Slot `index = y * columns + x`.
#[derive(Debug)]
pub struct GridContainer {
    items: Vec<ItemStack>,
    columns: usize,
    rows: usize,
    changed: bool,
}

impl GridContainer {
    /// Creates a new grid container with the given dimensions.
    #[must_use]
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            items: (0..columns * rows).map(|_| ItemStack::empty()).collect(),
            columns,
            rows,
            changed: false,
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the slot index for the given grid position.
    #[must_use]
    pub fn slot_at(&self, x: usize, y: usize) -> usize {
        y * self.columns + x
    }

    /// Returns whether the container has been modified since the last check.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Clears the changed flag.
    pub fn clear_changed(&mut self) {
        self.changed = false;
    }
}

impl Container for GridContainer {
    fn capacity(&self) -> usize {
        self.items.len()
    }

    fn grid_size(&self) -> Option<(usize, usize)> {
        Some((self.columns, self.rows))
    }

    fn get_item(&self, slot: usize) -> &ItemStack {
        &self.items[slot]
    }

    fn set_item(&mut self, slot: usize, item: ItemStack) {
        self.items[slot] = item;
        self.set_changed();
    }

    fn set_changed(&mut self) {
        self.changed = true;
    }

    fn clear(&mut self) {
        for item in &mut self.items {
            *item = ItemStack::empty();
        }
        self.set_changed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_layout() {
        let mut container = GridContainer::new(3, 2);
        assert_eq!(container.capacity(), 6);
        assert_eq!(container.grid_size(), Some((3, 2)));

        // (2, 1) is the last slot in row-major order
        let slot = container.slot_at(2, 1);
        assert_eq!(slot, 5);
        container.set_item(slot, ItemStack::new(4, 1));
        assert_eq!(container.get_item(5), &ItemStack::new(4, 1));
    }
}
