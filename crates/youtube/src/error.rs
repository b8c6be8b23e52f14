use thiserror::Error;

#[derive(Debug, Error)]
pub enum YoutubeError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("YouTube API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },

    /// Body of a successful response is not JSON
    #[error("Failed to decode response at '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response did not contain an items list")]
    MissingItems { status_code: u16 },

    #[error("YOUTUBE_API_KEY is not set")]
    MissingApiKey,
}

impl YoutubeError {
    /// HTTP status of the upstream response, if one was received
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status_code, .. } | Self::MissingItems { status_code } => {
                Some(*status_code)
            }
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Json { .. } | Self::MissingApiKey => None,
        }
    }

    /// True when the request never produced an HTTP response
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Request(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }
}
