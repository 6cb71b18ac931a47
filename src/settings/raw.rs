use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use vexi::DEFAULT_ENDPOINT;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

/// Prompt title used when neither the CLI nor a config file sets one.
const DEFAULT_TITLE: &str = "Countries";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    api: ApiSection,
    ui: UiSection,
}

/// API specific configuration options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
    endpoint: Option<String>,
}

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    title: Option<String>,
    initial_query: Option<String>,
    theme: Option<String>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(endpoint) = cli.endpoint.clone() {
            self.api.endpoint = Some(endpoint);
        }
        if let Some(title) = cli.title.clone() {
            self.ui.title = Some(title);
        }
        if let Some(query) = cli.initial_query.clone() {
            self.ui.initial_query = Some(query);
        }
        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            api_endpoint: detect_source(
                cli.endpoint.is_some(),
                self.api.endpoint.is_some(),
                "VEXI__API__ENDPOINT",
                "--endpoint",
                "api.endpoint",
            ),
            ui_theme: detect_source(
                cli.theme.is_some(),
                self.ui.theme.is_some(),
                "VEXI__UI__THEME",
                "--theme",
                "ui.theme",
            ),
        };

        let config = ResolvedConfig {
            endpoint: self
                .api
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            input_title: Some(self.ui.title.unwrap_or_else(|| DEFAULT_TITLE.to_string())),
            initial_query: self.ui.initial_query.unwrap_or_default(),
            theme: self.ui.theme,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}
