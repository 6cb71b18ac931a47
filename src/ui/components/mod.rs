//! Reusable widgets for the terminal UI.

pub(crate) mod cards;
pub(crate) mod prompt;
pub mod scrollbar;

pub(crate) use cards::{CardGridContext, render_cards};
pub(crate) use prompt::{InputContext, StatusState, render_input};
pub use scrollbar::{ScrollMetrics, render_scrollbar};
