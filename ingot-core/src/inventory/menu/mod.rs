//! Menu callback bookkeeping for composed views.
//!
//! Handlers are recorded per destination slot; actually dispatching them when
//! a viewer interacts with the rendered container is the server's job, not
//! this module's.

mod callbacks;
mod click_type;

pub use callbacks::{
    CallbackId, CloseHandler, MenuCallbacks, SlotChangeHandler, SlotClickHandler,
};
pub use click_type::ClickType;
