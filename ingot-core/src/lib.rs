//! Core inventory composition: containers, composed view layouts, and menu
//! callback bookkeeping.

pub mod inventory;
