//! This module contains the inventory system.

mod container;
mod grid_container;
pub mod menu;
mod simple_container;
pub mod view;

pub use container::Container;
pub use grid_container::GridContainer;
pub use menu::{
    CallbackId, ClickType, CloseHandler, MenuCallbacks, SlotChangeHandler, SlotClickHandler,
};
pub use simple_container::SimpleContainer;
pub use view::{LayoutError, Side, SlotDefinition, SourceId, ViewBuilder, ViewLayout};
