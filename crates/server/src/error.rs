use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::models::{VideoErrorKind, VideoServiceError};
use crate::services::{OnboardingError, SubscriptionError};

/// Unified application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// Genre ids that are not in the catalog
    #[error("Unknown genres: {}", .0.join(", "))]
    InvalidGenres(Vec<String>),

    #[error("Authentication required")]
    Unauthorized,

    #[error("Video API error: {0}")]
    VideoApi(#[from] VideoServiceError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Upstream failure other than the video API
    #[error("External API error: {0}")]
    ExternalApi(String),
}

/// JSON error body
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine readable error code
    pub code: String,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_genres: Option<Vec<String>>,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::InvalidGenres(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::VideoApi(e) if e.kind == VideoErrorKind::QuotaExceeded => {
                StatusCode::TOO_MANY_REQUESTS
            }
            AppError::VideoApi(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ExternalApi(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn code(status: StatusCode) -> &'static str {
        match status {
            StatusCode::BAD_REQUEST => "BAD_REQUEST",
            StatusCode::UNAUTHORIZED => "UNAUTHORIZED",
            StatusCode::NOT_FOUND => "NOT_FOUND",
            StatusCode::TOO_MANY_REQUESTS => "TOO_MANY_REQUESTS",
            StatusCode::BAD_GATEWAY => "BAD_GATEWAY",
            _ => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (error, details, invalid_genres) = match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) => (msg, None, None),
            AppError::InvalidGenres(ids) => {
                (format!("Unknown genres: {}", ids.join(", ")), None, Some(ids))
            }
            AppError::Unauthorized => ("Authentication required".to_string(), None, None),
            AppError::VideoApi(e) => {
                tracing::error!("Video API error ({}): {}", e.kind.as_str(), e.message);
                (e.message, Some(e.kind.as_str().to_string()), None)
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                ("Database error".to_string(), Some(e.to_string()), None)
            }
            AppError::ExternalApi(msg) => {
                tracing::error!("External API error: {}", msg);
                ("External API error".to_string(), Some(msg), None)
            }
        };

        let body = ErrorResponse {
            code: Self::code(status).to_string(),
            error,
            details,
            invalid_genres,
        };

        (status, Json(body)).into_response()
    }
}

impl From<OnboardingError> for AppError {
    fn from(e: OnboardingError) -> Self {
        match e {
            OnboardingError::TooManyGenres(_) => AppError::BadRequest(e.to_string()),
            OnboardingError::UnknownGenres(ids) => AppError::InvalidGenres(ids),
            OnboardingError::UserNotFound(_) => AppError::NotFound(e.to_string()),
            OnboardingError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<SubscriptionError> for AppError {
    fn from(e: SubscriptionError) -> Self {
        AppError::ExternalApi(e.to_string())
    }
}

/// Malformed request body
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Malformed query string
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }
}
