//! Layout composition errors.

use std::fmt;

use thiserror::Error;

/// Which inventory a capacity or shape check failed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The source inventory the staged region reads from.
    Source,
    /// The destination inventory being composed.
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Target => write!(f, "target"),
        }
    }
}

/// Errors raised while composing a view layout.
///
/// All checks run synchronously in the builder call that violates them; a
/// failed call never writes any part of the offending region into the
/// committed layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A slot operation was attempted before a container shape was selected.
    #[error("no container shape selected")]
    NoShape,

    /// A source-slot operation was attempted before a source was selected.
    #[error("no source inventory selected")]
    NoSource,

    /// The selected source inventory is unusable.
    #[error("source inventory is unusable (capacity {capacity})")]
    InvalidSource {
        /// The capacity of the rejected source.
        capacity: usize,
    },

    /// A region does not fit into the remaining slot capacity.
    #[error("{side} inventory is too small: {required} slot(s) required, {available} available")]
    Capacity {
        /// The side the check failed against.
        side: Side,
        /// The number of slots the region needs.
        required: usize,
        /// The number of slots actually available.
        available: usize,
    },

    /// A grid region does not fit into the inventory's grid bounds.
    #[error(
        "{side} grid cannot fit a {columns}x{rows} region at column {x}, row {y} \
         ({available_columns}x{available_rows} available)"
    )]
    GridCapacity {
        /// The side the check failed against.
        side: Side,
        /// The staged region's column count.
        columns: usize,
        /// The staged region's row count.
        rows: usize,
        /// The anchor column.
        x: usize,
        /// The anchor row.
        y: usize,
        /// The inventory's column count.
        available_columns: usize,
        /// The inventory's row count.
        available_rows: usize,
    },

    /// A grid operation was requested against a non-grid inventory.
    #[error("{side} inventory is not a grid")]
    NotAGrid {
        /// The side lacking a grid layout.
        side: Side,
    },

    /// A region would bind a destination slot that is already bound.
    #[error("destination slot {index} is already bound")]
    SlotConflict {
        /// The conflicting destination slot index.
        index: usize,
    },

    /// `build` was invoked while destination slots remain unbound.
    #[error("layout is incomplete: {} of {size} slot(s) unbound (first: {})",
        .unbound.len(), .unbound.first().copied().unwrap_or_default())]
    IncompleteLayout {
        /// The unbound destination slot indices, ascending.
        unbound: Vec<usize>,
        /// The destination size.
        size: usize,
    },

    /// A region operation (anchor or callback) was attempted with nothing
    /// staged.
    #[error("no staged region")]
    NoStagedRegion,
}
