use serde::{Deserialize, Serialize};

/// Envelope shared by `videos.list` and `search.list`.
///
/// `items` stays optional so a body without the list can be told apart from
/// an empty result page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    #[serde(default)]
    pub items: Option<Vec<T>>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// One item as returned by either endpoint.
///
/// `videos.list` returns `id` as a plain string, `search.list` nests it as
/// `{ "kind": "youtube#video", "videoId": "..." }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoItem {
    #[serde(default)]
    pub id: Option<ResourceId>,
    #[serde(default)]
    pub snippet: Option<Snippet>,
    #[serde(default)]
    pub statistics: Option<Statistics>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Plain(String),
    Nested(NestedResourceId),
    /// Any other JSON value; never resolves to a video id
    Other(serde_json::Value),
}

impl ResourceId {
    /// Resolve the video id from either shape
    pub fn video_id(&self) -> Option<&str> {
        match self {
            Self::Plain(id) => Some(id.as_str()),
            Self::Nested(nested) => nested.video_id.as_deref(),
            Self::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedResourceId {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub channel_title: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnails {
    #[serde(default)]
    pub default: Option<Thumbnail>,
    #[serde(default)]
    pub medium: Option<Thumbnail>,
    #[serde(default)]
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnail {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub like_count: Option<String>,
}
