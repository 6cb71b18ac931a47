//! Interactive terminal UI orchestration for `vexi`.
//!
//! The [`builder`] module exposes the public-facing [`Picker`] builder. The
//! remaining submodules implement the event loop, rendering pipeline, state
//! management, and the reusable widgets/style definitions that power the
//! terminal application.

mod actions;
mod builder;
pub mod components;
pub mod input;
mod loader;
mod render;
mod runtime;
mod state;
pub mod style;

pub use builder::Picker;
pub use state::{App, BrowseOutcome, LoadPhase};
