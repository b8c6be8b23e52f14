use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use super::{MaxResultsQuery, DEFAULT_GENRE_RESULTS, DEFAULT_POPULAR_RESULTS};
use crate::{
    auth::{AuthUser, MaybeUser},
    error::{AppResult, ErrorResponse},
    models::{GenreSections, PopularVideos},
    state::AppState,
};

/// Popular videos for the configured region
#[utoipa::path(
    get,
    path = "/api/videos/popular",
    tag = "videos",
    params(MaxResultsQuery),
    responses(
        (status = 200, description = "Popular videos", body = PopularVideos),
        (status = 400, description = "Malformed or out of range maxResults", body = ErrorResponse),
        (status = 429, description = "Upstream quota exceeded", body = ErrorResponse),
        (status = 500, description = "Upstream request failed", body = ErrorResponse)
    )
)]
pub async fn get_popular_videos(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    query: Result<Query<MaxResultsQuery>, QueryRejection>,
) -> AppResult<Json<PopularVideos>> {
    let Query(query) = query?;
    let max_results = query.resolve(DEFAULT_POPULAR_RESULTS)?;
    if let Some(user) = &user {
        tracing::debug!("Popular videos requested by {}", user.user_id);
    }
    let videos = state.feed.popular(max_results).await?;
    Ok(Json(PopularVideos { videos }))
}

/// One section of videos per genre picked during onboarding.
///
/// Users without a selection get a single "Recommended" section of popular
/// videos. A genre whose search fails comes back with no videos.
#[utoipa::path(
    get,
    path = "/api/videos/by-genres",
    tag = "videos",
    params(MaxResultsQuery),
    responses(
        (status = 200, description = "Video sections", body = GenreSections),
        (status = 400, description = "Malformed or out of range maxResults", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    )
)]
pub async fn get_videos_by_genres(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    query: Result<Query<MaxResultsQuery>, QueryRejection>,
) -> AppResult<Json<GenreSections>> {
    let Query(query) = query?;
    let max_results = query.resolve(DEFAULT_GENRE_RESULTS)?;
    let sections = state.feed.by_genres(&user.user_id, max_results).await?;
    Ok(Json(GenreSections { sections }))
}
