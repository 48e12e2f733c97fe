//! TUI components using tui-realm.

pub mod action_bar;
pub mod help;
pub mod style_table;

pub use action_bar::ActionBar;
pub use help::{EDITOR_FOOTER_ACTIONS, format_footer, render_help};
pub use style_table::StyleTable;
