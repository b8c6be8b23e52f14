use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::{
    auth::AuthUser,
    error::{AppError, AppResult, ErrorResponse},
    models::{CompleteOnboardingRequest, CompleteOnboardingResponse, OnboardingStatus},
    state::AppState,
};

/// Get the onboarding status of the current user
#[utoipa::path(
    get,
    path = "/api/onboarding/status",
    tag = "onboarding",
    responses(
        (status = 200, description = "Onboarding status", body = OnboardingStatus),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    )
)]
pub async fn get_onboarding_status(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> AppResult<Json<OnboardingStatus>> {
    let status = state.onboarding.status(&user.user_id).await?;
    Ok(Json(status))
}

/// Complete onboarding with up to three genres.
///
/// An empty list skips genre selection but still marks onboarding complete.
/// Any unknown genre id rejects the whole request.
#[utoipa::path(
    post,
    path = "/api/onboarding/complete",
    tag = "onboarding",
    request_body = CompleteOnboardingRequest,
    responses(
        (status = 200, description = "Onboarding completed", body = CompleteOnboardingResponse),
        (status = 400, description = "Malformed body, too many or unknown genres", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    )
)]
pub async fn complete_onboarding(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<CompleteOnboardingRequest>, JsonRejection>,
) -> AppResult<Json<CompleteOnboardingResponse>> {
    let Json(payload) = payload?;
    payload.validate().map_err(AppError::BadRequest)?;

    state
        .onboarding
        .complete(&user.user_id, payload.genres)
        .await?;

    tracing::info!("User {} completed onboarding", user.user_id);
    Ok(Json(CompleteOnboardingResponse { success: true }))
}
