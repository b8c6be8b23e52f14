use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Uniform video record produced from either upstream response shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub channel_name: String,
    pub published_at: String,
    /// Absent on search results, which carry no statistics
    pub view_count: Option<String>,
}

/// Classified upstream failure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoErrorKind {
    NetworkError,
    QuotaExceeded,
    InvalidResponse,
    Unknown,
}

impl VideoErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NetworkError => "NETWORK_ERROR",
            Self::QuotaExceeded => "QUOTA_EXCEEDED",
            Self::InvalidResponse => "INVALID_RESPONSE",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Failure value returned by the video service; never a panic or a thrown fault
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct VideoServiceError {
    pub kind: VideoErrorKind,
    pub message: String,
    pub status_code: Option<u16>,
}

impl VideoServiceError {
    pub fn new(kind: VideoErrorKind, message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code,
        }
    }
}

pub type VideoServiceResult<T> = Result<T, VideoServiceError>;

/// Videos grouped under one genre, or under the fallback recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoSection {
    pub genre_id: String,
    pub genre_label: String,
    pub videos: Vec<VideoRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PopularVideos {
    pub videos: Vec<VideoRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenreSections {
    pub sections: Vec<VideoSection>,
}
