use axum::{extract::State, Json};

use crate::{
    auth::AuthUser,
    error::{AppResult, ErrorResponse},
    models::SubscriptionState,
    state::AppState,
};

/// Subscription state of the current user
#[utoipa::path(
    get,
    path = "/api/subscription",
    tag = "subscription",
    responses(
        (status = 200, description = "Subscription state", body = SubscriptionState),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 502, description = "Payments provider failed", body = ErrorResponse)
    )
)]
pub async fn get_subscription(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> AppResult<Json<SubscriptionState>> {
    Ok(Json(state.subscription.state(&user.user_id).await?))
}
