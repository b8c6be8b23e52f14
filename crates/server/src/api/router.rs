use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{openapi::ApiDoc, state::AppState};

use super::handlers;

pub fn create_router(state: AppState) -> (Router, utoipa::openapi::OpenApi) {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(handlers::health))
        .routes(routes!(handlers::list_genres))
        .routes(routes!(handlers::get_onboarding_status))
        .routes(routes!(handlers::complete_onboarding))
        .routes(routes!(handlers::get_popular_videos))
        .routes(routes!(handlers::get_videos_by_genres))
        .routes(routes!(handlers::get_subscription))
        .with_state(state)
        .split_for_parts();

    (router, api)
}
