use axum::{extract::State, Json};

use crate::{error::AppResult, models::Genre, state::AppState};

/// List the genre catalog in display order
#[utoipa::path(
    get,
    path = "/api/genres",
    tag = "genres",
    responses(
        (status = 200, description = "Genre catalog", body = Vec<Genre>)
    )
)]
pub async fn list_genres(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    Ok(Json(state.catalog.list().await?))
}
