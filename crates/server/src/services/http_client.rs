use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Shared client for all upstream APIs.
///
/// Upstream calls carry no retries of their own, so these timeouts are the
/// only bound on a hung request.
pub fn build_http_client() -> Result<Client, HttpClientError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()?;
    tracing::debug!("HTTP client initialized");
    Ok(client)
}
