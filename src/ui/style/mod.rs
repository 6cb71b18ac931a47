//! Styling primitives for the terminal UI.

pub mod theme;

pub use theme::Theme;
