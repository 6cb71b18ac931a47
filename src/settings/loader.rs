use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::env;
	use std::io::Write;
	use std::sync::{Mutex, MutexGuard};

	use clap::Parser;
	use tempfile::NamedTempFile;

	use super::*;
	use vexi::DEFAULT_ENDPOINT;

	// `load` reads the process environment, so tests that call it must not
	// overlap with tests that mutate `VEXI__` variables.
	static ENV_LOCK: Mutex<()> = Mutex::new(());

	fn env_lock() -> MutexGuard<'static, ()> {
		ENV_LOCK
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
	}

	fn cli(args: &[&str]) -> CliArgs {
		let mut argv = vec!["vexi", "--no-config"];
		argv.extend_from_slice(args);
		CliArgs::parse_from(argv)
	}

	fn config_file(contents: &str) -> NamedTempFile {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.expect("temp config");
		file.write_all(contents.as_bytes()).expect("write config");
		file
	}

	fn with_env_var<T>(name: &str, value: &str, body: impl FnOnce() -> T) -> T {
		let previous = env::var_os(name);
		// SAFETY: serialized by ENV_LOCK; the previous value is restored below.
		unsafe {
			env::set_var(name, value);
		}

		let result = body();

		if let Some(previous) = previous {
			// SAFETY: restoring the value captured at the start of the test.
			unsafe {
				env::set_var(name, previous);
			}
		} else {
			unsafe {
				env::remove_var(name);
			}
		}

		result
	}

	#[test]
	fn defaults_apply_without_any_configuration() {
		let _guard = env_lock();
		let resolved = load(&cli(&[])).expect("load succeeds");
		assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
		assert_eq!(resolved.input_title.as_deref(), Some("Countries"));
		assert!(resolved.initial_query.is_empty());
		assert!(resolved.theme.is_none());
	}

	#[test]
	fn config_files_override_the_defaults() {
		let _guard = env_lock();
		let file = config_file(
			"[api]\nendpoint = \"https://mirror.test/v3.1/all\"\n\n[ui]\ninitial_query = \"fr\"\n",
		);
		let path = file.path().to_str().expect("utf8 path");

		let resolved = load(&cli(&["--config", path])).expect("load succeeds");
		assert_eq!(resolved.endpoint, "https://mirror.test/v3.1/all");
		assert_eq!(resolved.initial_query, "fr");
	}

	#[test]
	fn cli_flags_beat_config_files() {
		let _guard = env_lock();
		let file = config_file("[api]\nendpoint = \"https://mirror.test/v3.1/all\"\n");
		let path = file.path().to_str().expect("utf8 path");

		let resolved = load(&cli(&[
			"--config",
			path,
			"--endpoint",
			"https://cli.test/all",
		]))
		.expect("load succeeds");
		assert_eq!(resolved.endpoint, "https://cli.test/all");
	}

	#[test]
	fn environment_variables_override_config_files() {
		let _guard = env_lock();
		let file = config_file("[api]\nendpoint = \"https://mirror.test/v3.1/all\"\n");
		let path = file.path().to_str().expect("utf8 path");

		let resolved = with_env_var("VEXI__API__ENDPOINT", "https://env.test/all", || {
			load(&cli(&["--config", path]))
		})
		.expect("load succeeds");

		assert_eq!(resolved.endpoint, "https://env.test/all");
	}

	#[test]
	fn cli_flags_beat_environment_variables() {
		let _guard = env_lock();
		let resolved = with_env_var("VEXI__API__ENDPOINT", "https://env.test/all", || {
			load(&cli(&["--endpoint", "https://cli.test/all"]))
		})
		.expect("load succeeds");

		assert_eq!(resolved.endpoint, "https://cli.test/all");
	}

	#[test]
	fn invalid_endpoint_reports_cli_provenance() {
		let _guard = env_lock();
		let err = load(&cli(&["--endpoint", "ftp://nope"])).unwrap_err();
		let message = format!("{err}");
		assert!(message.contains("api.endpoint"));
		assert!(message.contains("CLI flag `--endpoint`"));
	}

	#[test]
	fn invalid_theme_reports_config_provenance() {
		let _guard = env_lock();
		let file = config_file("[ui]\ntheme = \"neon\"\n");
		let path = file.path().to_str().expect("utf8 path");

		let err = load(&cli(&["--config", path])).unwrap_err();
		let message = format!("{err}");
		assert!(message.contains("ui.theme"));
		assert!(message.contains("configuration key `ui.theme`"));
	}

	#[test]
	fn invalid_theme_reports_environment_provenance() {
		let _guard = env_lock();
		let err = with_env_var("VEXI__UI__THEME", "neon", || load(&cli(&[]))).unwrap_err();

		let message = format!("{err}");
		assert!(message.contains("ui.theme"));
		assert!(message.contains("environment variable `VEXI__UI__THEME`"));
	}
}
