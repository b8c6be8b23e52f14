use std::sync::Arc;

use futures::future::join_all;
use sqlx::SqlitePool;

use super::genre_catalog::search_params;
use super::{GenreCatalog, VideoService};
use crate::models::{VideoRecord, VideoSection, VideoServiceResult};
use crate::repositories::UserRepository;

/// Section id used when a user has no genre selection
pub const RECOMMENDED_SECTION_ID: &str = "popular";
pub const RECOMMENDED_SECTION_LABEL: &str = "Recommended";

/// Assembles the video grid from per-genre searches
pub struct FeedService {
    db: SqlitePool,
    videos: Arc<VideoService>,
    catalog: Arc<GenreCatalog>,
    region_code: String,
}

impl FeedService {
    pub fn new(
        db: SqlitePool,
        videos: Arc<VideoService>,
        catalog: Arc<GenreCatalog>,
        region_code: impl Into<String>,
    ) -> Self {
        Self {
            db,
            videos,
            catalog,
            region_code: region_code.into(),
        }
    }

    /// Popular videos for everyone, signed in or not
    pub async fn popular(&self, max_results: u32) -> VideoServiceResult<Vec<VideoRecord>> {
        self.videos.fetch_popular(max_results, &self.region_code).await
    }

    /// One section per selected genre, searched concurrently.
    ///
    /// A failed genre search yields a section with no videos. Without a
    /// selection a single recommended section of popular videos is returned,
    /// or no section at all if that call fails.
    pub async fn by_genres(
        &self,
        user_id: &str,
        max_results: u32,
    ) -> Result<Vec<VideoSection>, sqlx::Error> {
        let genre_ids = UserRepository::get_genres(&self.db, user_id).await?;

        if genre_ids.is_empty() {
            return Ok(match self.popular(max_results).await {
                Ok(videos) => vec![VideoSection {
                    genre_id: RECOMMENDED_SECTION_ID.to_string(),
                    genre_label: RECOMMENDED_SECTION_LABEL.to_string(),
                    videos,
                }],
                Err(e) => {
                    tracing::warn!("Recommended section unavailable for {}: {}", user_id, e);
                    Vec::new()
                }
            });
        }

        let labels = self.catalog.labels().await?;

        let sections = genre_ids.iter().map(|genre_id| {
            let label = labels
                .get(genre_id)
                .cloned()
                .unwrap_or_else(|| genre_id.clone());
            async move {
                let params = search_params(genre_id);
                let videos = match self
                    .videos
                    .search_by_genre(genre_id, params.search_query, max_results, &self.region_code)
                    .await
                {
                    Ok(videos) => videos,
                    Err(e) => {
                        tracing::warn!("Genre section {} left empty: {}", genre_id, e);
                        Vec::new()
                    }
                };
                VideoSection {
                    genre_id: genre_id.clone(),
                    genre_label: label,
                    videos,
                }
            }
        });

        Ok(join_all(sections).await)
    }
}
