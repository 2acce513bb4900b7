//! A simple container implementation backed by a Vec.

use ingot_registry::item_stack::ItemStack;

use super::Container;

/// A simple container that stores items in a fixed-size vector.
#[derive(Debug)]
pub struct SimpleContainer {
    items: Vec<ItemStack>,
    changed: bool,
}

impl SimpleContainer {
    /// Creates a new container with the given number of slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            items: (0..capacity).map(|_| ItemStack::empty()).collect(),
            changed: false,
        }
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

impl Container for SimpleContainer {
    fn capacity(&self) -> usize {
        self.items.len()
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
    fn test_set_and_get() {
        let mut container = SimpleContainer::new(5);
        assert_eq!(container.capacity(), 5);
        assert!(container.is_empty());
        assert!(container.grid_size().is_none());

        container.set_item(2, ItemStack::new(7, 3));
        assert_eq!(container.get_item(2), &ItemStack::new(7, 3));
        assert!(!container.is_empty());
        assert!(container.has_changed());
    }

    #[test]
    fn test_clear() {
        let mut container = SimpleContainer::new(3);
        container.set_item(0, ItemStack::new(1, 1));
        container.clear();
        assert!(container.is_empty());
    }
}
