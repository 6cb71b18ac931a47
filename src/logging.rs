//! File-backed tracing setup.
//!
//! Diagnostics go to `<data_dir>/vexi.log` because stderr belongs to the
//! alternate screen while the UI runs. The filter is controlled through the
//! `VEXI_LOG` environment variable and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::sync::Once;

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "VEXI_LOG";
const LOG_FILE: &str = "vexi.log";

static INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Failures to create the log file or register the subscriber are swallowed:
/// logging is never allowed to take the application down.
pub fn initialize() {
    INIT.call_once(|| {
        let Ok(dir) = crate::app_dirs::get_data_dir() else {
            return;
        };
        if fs::create_dir_all(&dir).is_err() {
            return;
        }
        let Ok(file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE))
        else {
            return;
        };

        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .compact()
            .try_init();
    });
}
