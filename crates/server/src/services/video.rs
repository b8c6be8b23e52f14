use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use youtube::{PopularParams, SearchParams, VideoItem, YoutubeClient, YoutubeError};

use super::video_cache::ResponseCache;
use crate::models::{VideoErrorKind, VideoRecord, VideoServiceError, VideoServiceResult};

/// How long normalized upstream responses stay cached
pub const VIDEO_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// Upstream video search API.
///
/// Implemented by the real YouTube client; tests substitute an in-process
/// fake.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Most popular videos for a region (flat `id` items)
    async fn most_popular(&self, params: &PopularParams) -> youtube::Result<Vec<VideoItem>>;

    /// Free-text search (nested `id` items)
    async fn search(&self, params: &SearchParams) -> youtube::Result<Vec<VideoItem>>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}

#[async_trait]
impl VideoProvider for YoutubeClient {
    async fn most_popular(&self, params: &PopularParams) -> youtube::Result<Vec<VideoItem>> {
        YoutubeClient::most_popular(self, params).await
    }

    async fn search(&self, params: &SearchParams) -> youtube::Result<Vec<VideoItem>> {
        YoutubeClient::search(self, params).await
    }

    fn name(&self) -> &'static str {
        "youtube"
    }
}

/// Fronts the upstream API with the response cache and turns its responses
/// into [`VideoRecord`]s and classified failures.
///
/// Failures are returned, never retried. Two concurrent misses on the same key
/// both fetch and the later write wins.
pub struct VideoService {
    provider: Arc<dyn VideoProvider>,
    cache: Mutex<ResponseCache<Vec<VideoRecord>>>,
    relevance_language: Option<String>,
}

impl VideoService {
    pub fn new(provider: Arc<dyn VideoProvider>, cache: ResponseCache<Vec<VideoRecord>>) -> Self {
        Self {
            provider,
            cache: Mutex::new(cache),
            relevance_language: None,
        }
    }

    /// Bias genre searches toward a language (ISO 639-1)
    pub fn with_relevance_language(mut self, lang: impl Into<String>) -> Self {
        let lang = lang.into();
        self.relevance_language = (!lang.is_empty()).then_some(lang);
        self
    }

    /// Most popular videos for a region
    pub async fn fetch_popular(
        &self,
        max_results: u32,
        region_code: &str,
    ) -> VideoServiceResult<Vec<VideoRecord>> {
        let cache_key = format!("popular:{}:{}", region_code, max_results);
        if let Some(cached) = self.cached(&cache_key) {
            return Ok(cached);
        }

        let params = PopularParams {
            max_results,
            region_code: region_code.to_string(),
        };

        match self.provider.most_popular(&params).await {
            Ok(items) => Ok(self.store(cache_key, items)),
            Err(e) => {
                let error = classify_error(&e);
                tracing::error!(
                    provider = self.provider.name(),
                    kind = error.kind.as_str(),
                    status = ?error.status_code,
                    max_results,
                    region_code,
                    "Failed to fetch popular videos: {}",
                    e
                );
                Err(error)
            }
        }
    }

    /// Videos matching a genre's search query.
    ///
    /// Cached per genre id, not per query text.
    pub async fn search_by_genre(
        &self,
        genre_id: &str,
        search_query: &str,
        max_results: u32,
        region_code: &str,
    ) -> VideoServiceResult<Vec<VideoRecord>> {
        let cache_key = format!("genre:{}:{}:{}", genre_id, region_code, max_results);
        if let Some(cached) = self.cached(&cache_key) {
            return Ok(cached);
        }

        let params = SearchParams {
            query: search_query.to_string(),
            max_results,
            region_code: region_code.to_string(),
            relevance_language: self.relevance_language.clone(),
        };

        match self.provider.search(&params).await {
            Ok(items) => Ok(self.store(cache_key, items)),
            Err(e) => {
                let error = classify_error(&e);
                tracing::error!(
                    provider = self.provider.name(),
                    kind = error.kind.as_str(),
                    status = ?error.status_code,
                    genre_id,
                    search_query,
                    max_results,
                    region_code,
                    "Failed to search videos by genre: {}",
                    e
                );
                Err(error)
            }
        }
    }

    /// Drop every cached response
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    fn cached(&self, key: &str) -> Option<Vec<VideoRecord>> {
        let hit = self.cache.lock().get(key);
        if hit.is_some() {
            tracing::debug!("Video cache hit: {}", key);
        } else {
            tracing::debug!("Video cache miss: {}", key);
        }
        hit
    }

    fn store(&self, key: String, items: Vec<VideoItem>) -> Vec<VideoRecord> {
        let total = items.len();
        let videos: Vec<VideoRecord> = items.into_iter().filter_map(normalize_item).collect();
        if videos.len() < total {
            tracing::debug!(
                "Dropped {} of {} items without title, channel or id for {}",
                total - videos.len(),
                total,
                key
            );
        }

        self.cache.lock().set(key, videos.clone());
        videos
    }
}

/// Normalize one upstream item, or `None` if it lacks a title, a channel name
/// or a resolvable video id.
///
/// Thumbnail resolution prefers `medium`, then `default`, then empty.
pub fn normalize_item(item: VideoItem) -> Option<VideoRecord> {
    let snippet = item.snippet?;
    let title = snippet.title.filter(|t| !t.is_empty())?;
    let channel_name = snippet.channel_title.filter(|c| !c.is_empty())?;
    let video_id = item
        .id
        .as_ref()
        .and_then(|id| id.video_id())
        .filter(|id| !id.is_empty())?
        .to_string();

    let thumbnail_url = snippet
        .thumbnails
        .and_then(|thumbs| {
            thumbs
                .medium
                .and_then(|t| t.url)
                .or_else(|| thumbs.default.and_then(|t| t.url))
        })
        .unwrap_or_default();

    Some(VideoRecord {
        video_id,
        title,
        thumbnail_url,
        channel_name,
        published_at: snippet.published_at.unwrap_or_default(),
        view_count: item.statistics.and_then(|s| s.view_count),
    })
}

/// Map an upstream failure onto the error taxonomy, first match wins
pub fn classify_error(err: &YoutubeError) -> VideoServiceError {
    if err.is_transport() {
        return VideoServiceError::new(
            VideoErrorKind::NetworkError,
            "Failed to connect to the video API",
            None,
        );
    }

    match err {
        YoutubeError::Api {
            status_code: 403, ..
        } => VideoServiceError::new(
            VideoErrorKind::QuotaExceeded,
            "Video API quota exceeded",
            Some(403),
        ),
        YoutubeError::Api { status_code, .. } if *status_code >= 400 => VideoServiceError::new(
            VideoErrorKind::Unknown,
            format!("Video API error ({})", status_code),
            Some(*status_code),
        ),
        YoutubeError::MissingItems { status_code } => VideoServiceError::new(
            VideoErrorKind::InvalidResponse,
            "Video API response did not contain items",
            Some(*status_code),
        ),
        other => VideoServiceError::new(
            VideoErrorKind::NetworkError,
            other.to_string(),
            other.status_code(),
        ),
    }
}


#[cfg(test)]
mod tests {
    use super::fake::{popular_item, search_item, FakeVideoProvider};
    use super::*;
    use youtube::{ResourceId, Snippet, Thumbnail, Thumbnails};

    fn service(provider: Arc<FakeVideoProvider>) -> VideoService {
        VideoService::new(provider, ResponseCache::new())
    }

    #[test]
    fn test_normalize_flat_and_nested_ids() {
        let flat = normalize_item(popular_item("abc", "Clip")).unwrap();
        assert_eq!(flat.video_id, "abc");
        assert_eq!(flat.view_count.as_deref(), Some("1000"));

        let nested = normalize_item(search_item("xyz", "Trailer")).unwrap();
        assert_eq!(nested.video_id, "xyz");
        assert_eq!(nested.view_count, None);

        let mut no_id = popular_item("abc", "Clip");
        no_id.id = None;
        assert!(normalize_item(no_id).is_none());

        let mut other_id = popular_item("abc", "Clip");
        other_id.id = Some(ResourceId::Other(serde_json::json!(42)));
        assert!(normalize_item(other_id).is_none());
    }

    #[test]
    fn test_normalize_drops_missing_title_or_channel() {
        let mut no_title = popular_item("abc", "Clip");
        if let Some(snippet) = no_title.snippet.as_mut() {
            snippet.title = None;
        }
        assert!(normalize_item(no_title).is_none());

        let mut no_channel = search_item("xyz", "Trailer");
        if let Some(snippet) = no_channel.snippet.as_mut() {
            snippet.channel_title = None;
        }
        assert!(normalize_item(no_channel).is_none());

        let mut no_snippet = popular_item("abc", "Clip");
        no_snippet.snippet = None;
        assert!(normalize_item(no_snippet).is_none());
    }

    #[test]
    fn test_normalize_thumbnail_fallbacks() {
        let medium = normalize_item(popular_item("a", "t")).unwrap();
        assert_eq!(medium.thumbnail_url, "https://i.ytimg.com/t/mqdefault.jpg");

        let item = VideoItem {
            id: Some(ResourceId::Plain("b".into())),
            snippet: Some(Snippet {
                title: Some("t".into()),
                channel_title: Some("c".into()),
                published_at: None,
                thumbnails: Some(Thumbnails {
                    default: Some(Thumbnail {
                        url: Some("default.jpg".into()),
                        ..Default::default()
                    }),
                    medium: None,
                    high: None,
                }),
            }),
            statistics: None,
        };
        let record = normalize_item(item).unwrap();
        assert_eq!(record.thumbnail_url, "default.jpg");
        assert_eq!(record.published_at, "");

        let bare = VideoItem {
            id: Some(ResourceId::Plain("c".into())),
            snippet: Some(Snippet {
                title: Some("t".into()),
                channel_title: Some("c".into()),
                ..Default::default()
            }),
            statistics: None,
        };
        assert_eq!(normalize_item(bare).unwrap().thumbnail_url, "");
    }

    #[test]
    fn test_classify_error() {
        let quota = classify_error(&YoutubeError::Api {
            status_code: 403,
            message: "quotaExceeded".into(),
        });
        assert_eq!(quota.kind, VideoErrorKind::QuotaExceeded);
        assert_eq!(quota.status_code, Some(403));

        let server = classify_error(&YoutubeError::Api {
            status_code: 500,
            message: "boom".into(),
        });
        assert_eq!(server.kind, VideoErrorKind::Unknown);
        assert!(server.message.contains("500"));

        let missing = classify_error(&YoutubeError::MissingItems { status_code: 200 });
        assert_eq!(missing.kind, VideoErrorKind::InvalidResponse);
        assert_eq!(missing.status_code, Some(200));

        let not_json = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let not_json = classify_error(&YoutubeError::Json {
            path: ".".into(),
            source: not_json,
        });
        assert_eq!(not_json.kind, VideoErrorKind::NetworkError);
        assert_eq!(not_json.status_code, None);

        let no_key = classify_error(&YoutubeError::MissingApiKey);
        assert_eq!(no_key.kind, VideoErrorKind::NetworkError);
        assert_eq!(no_key.message, "YOUTUBE_API_KEY is not set");
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        // Nothing listens on the discard port
        let client = YoutubeClient::new(reqwest::Client::new(), "key")
            .with_base_url("http://127.0.0.1:9");
        let service = VideoService::new(Arc::new(client), ResponseCache::new());

        let err = service.fetch_popular(12, "JP").await.unwrap_err();
        assert_eq!(err.kind, VideoErrorKind::NetworkError);
        assert_eq!(err.status_code, None);
    }

    #[tokio::test]
    async fn test_fetch_popular_caches_normalized_result() {
        let provider = Arc::new(FakeVideoProvider::new().with_popular(|| {
            let mut broken = popular_item("bad", "Broken");
            broken.snippet = None;
            Ok(vec![popular_item("a", "One"), broken, popular_item("b", "Two")])
        }));
        let service = service(provider.clone());

        let first = service.fetch_popular(12, "JP").await.unwrap();
        let ids: Vec<_> = first.iter().map(|v| v.video_id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);

        let second = service.fetch_popular(12, "JP").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(provider.popular_calls(), 1);

        // Different size is a different key
        service.fetch_popular(5, "JP").await.unwrap();
        assert_eq!(provider.popular_calls(), 2);
    }

    #[tokio::test]
    async fn test_quota_failure_is_not_cached() {
        let provider = Arc::new(FakeVideoProvider::new().with_popular(|| {
            Err(YoutubeError::Api {
                status_code: 403,
                message: "quotaExceeded".into(),
            })
        }));
        let service = service(provider.clone());

        let err = service.fetch_popular(12, "JP").await.unwrap_err();
        assert_eq!(err.kind, VideoErrorKind::QuotaExceeded);

        service.fetch_popular(12, "JP").await.unwrap_err();
        assert_eq!(provider.popular_calls(), 2);
    }

    #[tokio::test]
    async fn test_search_cache_key_ignores_query_text() {
        let provider = Arc::new(
            FakeVideoProvider::new().with_search(|_| Ok(vec![search_item("x", "Trailer")])),
        );
        let service = service(provider.clone());

        service.search_by_genre("action", "first query", 8, "JP").await.unwrap();
        service.search_by_genre("action", "other query", 8, "JP").await.unwrap();
        assert_eq!(provider.search_queries(), vec!["first query".to_string()]);

        service.clear_cache();
        service.search_by_genre("action", "other query", 8, "JP").await.unwrap();
        assert_eq!(provider.search_queries().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_result_is_cached() {
        let provider = Arc::new(FakeVideoProvider::new());
        let service = service(provider.clone());

        assert!(service.fetch_popular(12, "JP").await.unwrap().is_empty());
        assert!(service.fetch_popular(12, "JP").await.unwrap().is_empty());
        assert_eq!(provider.popular_calls(), 1);
    }
}
