//! One-shot background fetch of the country list.
//!
//! The worker performs a single GET, sends exactly one [`FetchUpdate`] over an
//! `mpsc` channel, and exits. The send result is ignored: once the app (and
//! with it the receiver) is gone, a late settlement is dropped on the floor
//! instead of touching disposed state.

use std::sync::mpsc::{self, Receiver};
use std::thread;

use crate::api::{Client, FetchError};
use crate::catalog::Country;

/// The single settlement message produced by the loader thread.
pub(crate) enum FetchUpdate {
    Loaded(Vec<Country>),
    Failed,
}

/// Spawn the loader thread for the given client.
pub(crate) fn spawn(client: Client) -> Receiver<FetchUpdate> {
    spawn_worker(move || client.fetch_countries())
}

fn spawn_worker<F>(fetch: F) -> Receiver<FetchUpdate>
where
    F: FnOnce() -> Result<Vec<Country>, FetchError> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let update = match fetch() {
            Ok(countries) => {
                tracing::debug!(count = countries.len(), "country fetch succeeded");
                FetchUpdate::Loaded(countries)
            }
            Err(err) => {
                tracing::warn!(error = %err, "country fetch failed");
                FetchUpdate::Failed
            }
        };
        let _ = tx.send(update);
    });
    rx
}
