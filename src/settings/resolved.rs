use std::fmt;

use thiserror::Error;

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub endpoint: String,
	pub input_title: Option<String>,
	pub initial_query: String,
	pub theme: Option<String>,
}

/// Where a configuration value came from, for error messages.
#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Provenance of the values that need validation.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) api_endpoint: Option<SettingSource>,
	pub(crate) ui_theme: Option<SettingSource>,
}

impl ConfigSources {
	fn source_for_endpoint(&self) -> SettingSource {
		self.api_endpoint
			.clone()
			.unwrap_or(SettingSource::ConfigKey("api.endpoint"))
	}

	fn source_for_theme(&self) -> SettingSource {
		self.ui_theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}
}

#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	fn invalid<V, R>(key: &'static str, value: V, origin: SettingSource, reason: R) -> Self
	where
		V: Into<String>,
		R: Into<String>,
	{
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		if !is_http_url(&self.endpoint) {
			return Err(ConfigError::invalid(
				"api.endpoint",
				self.endpoint.clone(),
				sources.source_for_endpoint(),
				"must be an http:// or https:// URL",
			));
		}

		if let Some(theme) = &self.theme
			&& vexi::by_name(theme).is_none()
		{
			return Err(ConfigError::invalid(
				"ui.theme",
				theme.clone(),
				sources.source_for_theme(),
				format!("unknown theme (available: {})", vexi::names().join(", ")),
			));
		}

		Ok(())
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Endpoint: {}", self.endpoint);
		println!(
			"  UI theme: {}",
			self.theme.as_deref().unwrap_or("(default)")
		);
		if let Some(title) = &self.input_title {
			println!("  Prompt title: {title}");
		}
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
		println!("  Output: interactive picker");
	}
}

fn is_http_url(value: &str) -> bool {
	let rest = value
		.strip_prefix("https://")
		.or_else(|| value.strip_prefix("http://"));
	matches!(rest, Some(host) if !host.is_empty())
}
