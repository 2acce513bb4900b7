//! Item stack representation.

use std::mem;

use serde::{Deserialize, Serialize};

/// The item id of air (the empty item).
pub const ITEM_AIR: u16 = 0;

/// The default maximum stack size.
pub const DEFAULT_MAX_STACK_SIZE: i32 = 64;

/// A stack of items: an item id and a count.
///
/// A stack with the air item or a non-positive count is considered empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// The item id (protocol id; 0 is air).
    pub item: u16,
    /// The number of items in the stack.
    pub count: i32,
}

impl ItemStack {
    /// Creates a new item stack.
    #[must_use]
    pub const fn new(item: u16, count: i32) -> Self {
        Self { item, count }
    }

    /// Returns the empty item stack.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            item: ITEM_AIR,
            count: 0,
        }
    }

    /// Returns true if this stack holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item == ITEM_AIR || self.count <= 0
    }

    /// Returns the number of items in the stack.
    #[must_use]
    pub const fn count(&self) -> i32 {
        self.count
    }

    /// Sets the stack count. A count of zero clears the stack.
    pub fn set_count(&mut self, count: i32) {
        self.count = count;
        if self.count <= 0 {
            *self = Self::empty();
        }
    }

    /// Increases the stack count.
    pub fn grow(&mut self, amount: i32) {
        self.set_count(self.count + amount);
    }

    /// Decreases the stack count, clearing the stack when it reaches zero.
    pub fn shrink(&mut self, amount: i32) {
        self.set_count(self.count - amount);
    }

    /// Splits off up to `count` items into a new stack.
    pub fn split(&mut self, count: i32) -> Self {
        let taken = count.min(self.count).max(0);
        if taken == 0 {
            return Self::empty();
        }
        let result = self.copy_with_count(taken);
        self.shrink(taken);
        result
    }

    /// Returns the whole stack and leaves this one empty.
    pub fn copy_and_clear(&mut self) -> Self {
        mem::replace(self, Self::empty())
    }

    /// Returns a copy of this stack with the given count.
    #[must_use]
    pub fn copy_with_count(&self, count: i32) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        Self::new(self.item, count)
    }

    /// Returns the maximum stack size for this item.
    #[must_use]
    pub const fn max_stack_size(&self) -> i32 {
        DEFAULT_MAX_STACK_SIZE
    }

    /// Returns whether this stack can hold more than one item.
    #[must_use]
    pub const fn is_stackable(&self) -> bool {
        self.max_stack_size() > 1
    }

    /// Returns whether two stacks hold the same item.
    #[must_use]
    pub const fn is_same_item(a: &Self, b: &Self) -> bool {
        a.item == b.item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stack() {
        assert!(ItemStack::empty().is_empty());
        assert!(ItemStack::new(ITEM_AIR, 5).is_empty());
        assert!(ItemStack::new(7, 0).is_empty());
        assert!(!ItemStack::new(7, 1).is_empty());
    }

    #[test]
    fn test_split() {
        let mut stack = ItemStack::new(3, 10);
        let taken = stack.split(4);
        assert_eq!(taken, ItemStack::new(3, 4));
        assert_eq!(stack.count(), 6);

        let rest = stack.split(100);
        assert_eq!(rest.count(), 6);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_grow_and_shrink() {
        let mut stack = ItemStack::new(3, 2);
        stack.grow(3);
        assert_eq!(stack.count(), 5);
        stack.shrink(5);
        assert!(stack.is_empty());
        assert_eq!(stack, ItemStack::empty());
    }

    #[test]
    fn test_copy_and_clear() {
        let mut stack = ItemStack::new(9, 12);
        let taken = stack.copy_and_clear();
        assert_eq!(taken, ItemStack::new(9, 12));
        assert!(stack.is_empty());
    }
}
