//! homecard: a terminal editor for homepage card layout configuration.
//!
//! The homepage is composed of named cards (clock, calendar, music, ...),
//! each with a small set of layout attributes. This crate edits those
//! attributes in a table view, resets them to the bundled defaults, and
//! hands the collection off to the shared configuration store when the user
//! enters drag-based manual layout mode.

pub mod card_styles;
pub mod cli;
pub mod coerce;
pub mod config;
pub mod labels;
pub mod logging;
pub mod stores;
pub mod tui;
