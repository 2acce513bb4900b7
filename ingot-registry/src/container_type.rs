//! Container kind catalog and container shapes.

use serde::{Deserialize, Serialize};

/// The number of slots per row in the generic chest-like layouts.
pub const SLOTS_PER_ROW: usize = 9;

/// The fixed shape of a destination container: total slot count plus
/// optional 2D grid dimensions for grid-capable kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerShape {
    size: usize,
    grid: Option<(usize, usize)>,
}

impl ContainerShape {
    /// Creates a flat (non-grid) shape with the given slot count.
    #[must_use]
    pub const fn flat(size: usize) -> Self {
        Self { size, grid: None }
    }

    /// Creates a grid shape with the given column and row counts.
    #[must_use]
    pub const fn grid(columns: usize, rows: usize) -> Self {
        Self {
            size: columns * rows,
            grid: Some((columns, rows)),
        }
    }

    /// Returns the total slot count.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the grid dimensions as `(columns, rows)`, if grid-capable.
    #[must_use]
    pub const fn grid_size(&self) -> Option<(usize, usize)> {
        self.grid
    }

    /// Returns whether this shape has a 2D grid layout.
    #[must_use]
    pub const fn is_grid(&self) -> bool {
        self.grid.is_some()
    }
}

/// Container type identifiers matching Minecraft's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
#[allow(missing_docs)]
pub enum ContainerType {
    Generic9x1 = 0,
    Generic9x2 = 1,
    Generic9x3 = 2,
    Generic9x4 = 3,
    Generic9x5 = 4,
    Generic9x6 = 5,
    Generic3x3 = 6,
    Crafter3x3 = 7,
    Anvil = 8,
    Beacon = 9,
    BlastFurnace = 10,
    BrewingStand = 11,
    Crafting = 12,
    Enchantment = 13,
    Furnace = 14,
    Grindstone = 15,
    Hopper = 16,
    Lectern = 17,
    Loom = 18,
    Merchant = 19,
    ShulkerBox = 20,
    Smithing = 21,
    Smoker = 22,
    CartographyTable = 23,
    Stonecutter = 24,
}

impl ContainerType {
    /// Returns the container type ID for network serialization.
    #[must_use]
    pub const fn id(self) -> i32 {
        self as i32
    }

    /// Creates a `ContainerType` from an ID.
    #[must_use]
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(Self::Generic9x1),
            1 => Some(Self::Generic9x2),
            2 => Some(Self::Generic9x3),
            3 => Some(Self::Generic9x4),
            4 => Some(Self::Generic9x5),
            5 => Some(Self::Generic9x6),
            6 => Some(Self::Generic3x3),
            7 => Some(Self::Crafter3x3),
            8 => Some(Self::Anvil),
            9 => Some(Self::Beacon),
            10 => Some(Self::BlastFurnace),
            11 => Some(Self::BrewingStand),
            12 => Some(Self::Crafting),
            13 => Some(Self::Enchantment),
            14 => Some(Self::Furnace),
            15 => Some(Self::Grindstone),
            16 => Some(Self::Hopper),
            17 => Some(Self::Lectern),
            18 => Some(Self::Loom),
            19 => Some(Self::Merchant),
            20 => Some(Self::ShulkerBox),
            21 => Some(Self::Smithing),
            22 => Some(Self::Smoker),
            23 => Some(Self::CartographyTable),
            24 => Some(Self::Stonecutter),
            _ => None,
        }
    }

    /// Returns the shape of the container this type opens.
    ///
    /// Only the container's own slots are counted; the viewing player's
    /// inventory is not part of the shape.
    #[must_use]
    pub const fn shape(self) -> ContainerShape {
        match self {
            Self::Generic9x1 => ContainerShape::grid(SLOTS_PER_ROW, 1),
            Self::Generic9x2 => ContainerShape::grid(SLOTS_PER_ROW, 2),
            Self::Generic9x3 | Self::ShulkerBox => ContainerShape::grid(SLOTS_PER_ROW, 3),
            Self::Generic9x4 => ContainerShape::grid(SLOTS_PER_ROW, 4),
            Self::Generic9x5 => ContainerShape::grid(SLOTS_PER_ROW, 5),
            Self::Generic9x6 => ContainerShape::grid(SLOTS_PER_ROW, 6),
            Self::Generic3x3 | Self::Crafter3x3 => ContainerShape::grid(3, 3),
            Self::Anvil | Self::Furnace | Self::BlastFurnace | Self::Smoker | Self::Merchant
            | Self::Grindstone | Self::CartographyTable => ContainerShape::flat(3),
            Self::Beacon | Self::Lectern => ContainerShape::flat(1),
            Self::BrewingStand | Self::Hopper => ContainerShape::flat(5),
            Self::Crafting => ContainerShape::flat(10),
            Self::Enchantment | Self::Stonecutter => ContainerShape::flat(2),
            Self::Loom | Self::Smithing => ContainerShape::flat(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        for id in 0..25 {
            let ty = ContainerType::from_id(id).unwrap();
            assert_eq!(ty.id(), id);
        }
        assert!(ContainerType::from_id(25).is_none());
        assert!(ContainerType::from_id(-1).is_none());
    }

    #[test]
    fn test_vanilla_shapes() {
        let chest = ContainerType::Generic9x6.shape();
        assert_eq!(chest.size(), 54);
        assert_eq!(chest.grid_size(), Some((9, 6)));

        let dispenser = ContainerType::Generic3x3.shape();
        assert_eq!(dispenser.size(), 9);
        assert!(dispenser.is_grid());

        let hopper = ContainerType::Hopper.shape();
        assert_eq!(hopper.size(), 5);
        assert!(!hopper.is_grid());

        assert_eq!(ContainerType::Crafting.shape().size(), 10);
        assert_eq!(ContainerType::Beacon.shape().size(), 1);
    }

    #[test]
    fn test_custom_shapes() {
        let shape = ContainerShape::grid(2, 2);
        assert_eq!(shape.size(), 4);
        assert_eq!(shape.grid_size(), Some((2, 2)));
        assert!(!ContainerShape::flat(7).is_grid());
    }
}
