//! TUI activities.

pub mod layout;

pub use layout::{LayoutActivity, Msg};
