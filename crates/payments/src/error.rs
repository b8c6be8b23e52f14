use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentsError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Payments API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },

    #[error("Invalid payments API URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to decode response at '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
