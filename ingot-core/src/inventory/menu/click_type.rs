//! Click type definitions for container interactions.

/// The type of click action performed on a container slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ClickType {
    /// Normal left or right click to pick up or place items.
    Pickup = 0,
    /// Shift-click to quickly move items between container sections.
    QuickMove = 1,
    /// Number key (1-9) or offhand key (F) to swap with hotbar/offhand.
    Swap = 2,
    /// Middle-click in creative mode to clone the full stack.
    Clone = 3,
    /// Q key to throw items out of the inventory.
    Throw = 4,
    /// Drag across multiple slots to distribute items.
    QuickCraft = 5,
    /// Double-click to collect all matching items to cursor.
    PickupAll = 6,
}

impl ClickType {
    /// Converts a byte value to a `ClickType`.
    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Pickup),
            1 => Some(Self::QuickMove),
            2 => Some(Self::Swap),
            3 => Some(Self::Clone),
            4 => Some(Self::Throw),
            5 => Some(Self::QuickCraft),
            6 => Some(Self::PickupAll),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        assert_eq!(ClickType::from_id(0), Some(ClickType::Pickup));
        assert_eq!(ClickType::from_id(6), Some(ClickType::PickupAll));
        assert_eq!(ClickType::from_id(7), None);
    }
}
