use anyhow::Result;
use vexi::{BrowseOutcome, Picker};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive browsing experience.
pub(crate) struct BrowseWorkflow {
    picker: Picker,
}

impl BrowseWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let picker = PickerFactory::build(config);
        Ok(Self { picker })
    }

    pub(crate) fn run(self) -> Result<BrowseOutcome> {
        self.picker.run()
    }
}

/// Helper for translating resolved configuration into a configured `Picker`.
struct PickerFactory {
    picker: Picker,
}

impl PickerFactory {
    fn build(config: ResolvedConfig) -> Picker {
        let ResolvedConfig {
            endpoint,
            input_title,
            initial_query,
            theme,
        } = config;

        Self::new(endpoint)
            .with_input_title(input_title)
            .with_initial_query(initial_query)
            .with_theme(theme)
            .finish()
    }

    fn new(endpoint: String) -> Self {
        let picker = Picker::new().with_endpoint(endpoint);
        Self { picker }
    }

    fn with_input_title(mut self, title: Option<String>) -> Self {
        if let Some(title) = title {
            self.picker = self.picker.with_input_title(title);
        }
        self
    }

    fn with_initial_query(mut self, query: String) -> Self {
        self.picker = self.picker.with_initial_query(query);
        self
    }

    fn with_theme(mut self, theme: Option<String>) -> Self {
        if let Some(theme) = theme {
            self.picker = self.picker.with_theme_name(&theme);
        }
        self
    }

    fn finish(self) -> Picker {
        self.picker
    }
}
