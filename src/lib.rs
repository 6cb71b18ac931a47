//! Core crate exports for building and running the `vexi` terminal interface.
//!
//! The root module primarily re-exports types from the API, catalog, and UI
//! subsystems so that embedders can configure the application without digging
//! through the module hierarchy.

pub mod api;
pub mod app_dirs;
pub mod catalog;
pub mod logging;
pub mod ui;

pub use api::{Client, DEFAULT_ENDPOINT, FetchError};
pub use catalog::{Country, filter_countries};
pub use ui::{BrowseOutcome, Picker};
pub use ui::style::theme::{Theme, by_name, default_theme, names};
