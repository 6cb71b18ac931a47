//! Blocking HTTP client for the REST Countries endpoint.
//!
//! One GET per run; the response is decoded wholesale into a list of
//! [`Country`] records. All failure modes collapse into [`FetchError`] and are
//! surfaced to the UI as a single failed state.

use reqwest::StatusCode;
use reqwest::blocking;
use thiserror::Error;

use crate::catalog::Country;

/// Endpoint queried when the configuration does not override it.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all";

/// Everything that can go wrong while fetching the country list.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),
    #[error("malformed countries payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Thin wrapper around a blocking HTTP client bound to one endpoint.
pub struct Client {
    http: blocking::Client,
    endpoint: String,
}

impl Client {
    /// Build a client for the given endpoint. No headers, no query
    /// parameters; transport defaults apply.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let http = blocking::Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Endpoint this client is bound to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch and decode the full country list.
    ///
    /// Any 2xx status with a decodable array body is a success; everything
    /// else is an error.
    pub fn fetch_countries(&self) -> Result<Vec<Country>, FetchError> {
        let response = self.http.get(&self.endpoint).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let body = response.text()?;
        decode_countries(&body)
    }
}

/// Decode a JSON array of country records.
///
/// Split out of [`Client::fetch_countries`] so the parse taxonomy is testable
/// without a socket.
pub fn decode_countries(body: &str) -> Result<Vec<Country>, FetchError> {
    Ok(serde_json::from_str(body)?)
}
