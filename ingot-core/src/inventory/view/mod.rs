//! Composition of viewable inventories.
//!
//! [`ViewBuilder`] assembles a new fixed-shape inventory out of slot regions
//! borrowed from existing containers plus static dummy slots, and records
//! per-region callbacks. The finished [`ViewLayout`] is an immutable
//! index-to-binding table; rendering and interaction dispatch happen in the
//! server's container layer.

mod builder;
mod error;
mod layout;

pub use builder::ViewBuilder;
pub use error::{LayoutError, Side};
pub use layout::{SlotDefinition, SourceId, ViewLayout};
