use anyhow::{Context, Result};

use super::loader;
use super::state::{App, BrowseOutcome};
use super::style::Theme;
use crate::api::{Client, DEFAULT_ENDPOINT};

/// A small builder for configuring the interactive country browser before
/// running it: endpoint, prompt title, initial query, and theme.
pub struct Picker {
    endpoint: String,
    input_title: Option<String>,
    initial_query: String,
    theme: Option<Theme>,
}

impl Default for Picker {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker {
    /// Create a picker against the default REST Countries endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            input_title: None,
            initial_query: String::new(),
            theme: None,
        }
    }

    /// Override the countries endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the prompt title shown ahead of the query.
    pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
        self.input_title = Some(title.into());
        self
    }

    /// Provide the query text the session starts with.
    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.initial_query = query.into();
        self
    }

    /// Select a built-in theme by name. Unknown names keep the default.
    pub fn with_theme_name(mut self, name: &str) -> Self {
        if let Some(theme) = super::style::theme::by_name(name) {
            self.theme = Some(theme);
        }
        self
    }

    /// Use an explicit theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Spawn the loader, run the interactive UI, and return the outcome.
    pub fn run(self) -> Result<BrowseOutcome> {
        crate::logging::initialize();

        let client =
            Client::new(&self.endpoint).context("failed to build the countries HTTP client")?;
        tracing::info!(endpoint = %client.endpoint(), "starting country fetch");

        let mut app = App::new(self.initial_query);
        app.input_title = self.input_title;
        if let Some(theme) = self.theme {
            app.set_theme(theme);
        }
        app.set_fetch_updates(loader::spawn(client));

        app.run()
    }
}
