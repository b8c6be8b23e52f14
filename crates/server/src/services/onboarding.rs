use std::sync::Arc;

use sqlx::SqlitePool;
use thiserror::Error;

use super::GenreCatalog;
use crate::models::{OnboardingStatus, MAX_SELECTED_GENRES};
use crate::repositories::UserRepository;

#[derive(Debug, Error)]
pub enum OnboardingError {
    #[error("At most {} genres can be selected, got {}", MAX_SELECTED_GENRES, .0)]
    TooManyGenres(usize),

    #[error("Unknown genre ids: {}", .0.join(", "))]
    UnknownGenres(Vec<String>),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub struct OnboardingService {
    db: SqlitePool,
    catalog: Arc<GenreCatalog>,
}

impl OnboardingService {
    pub fn new(db: SqlitePool, catalog: Arc<GenreCatalog>) -> Self {
        Self { db, catalog }
    }

    /// Completion flag and selected genres; unknown users are not started
    pub async fn status(&self, user_id: &str) -> Result<OnboardingStatus, OnboardingError> {
        let completed = UserRepository::get_onboarding_completed(&self.db, user_id)
            .await?
            .unwrap_or(false);
        let genres = UserRepository::get_genres(&self.db, user_id).await?;
        Ok(OnboardingStatus { completed, genres })
    }

    /// Validate and persist a genre selection, marking onboarding completed.
    ///
    /// An empty selection is a skip and still completes onboarding. Any
    /// unknown id rejects the whole request. Calling again replaces the
    /// previous selection.
    pub async fn complete(&self, user_id: &str, genres: Vec<String>) -> Result<(), OnboardingError> {
        if genres.len() > MAX_SELECTED_GENRES {
            return Err(OnboardingError::TooManyGenres(genres.len()));
        }

        let mut selection: Vec<String> = Vec::with_capacity(genres.len());
        for id in genres {
            if !selection.contains(&id) {
                selection.push(id);
            }
        }

        let unknown = self.catalog.find_unknown(&selection).await?;
        if !unknown.is_empty() {
            tracing::warn!("Rejected onboarding for {}: unknown genres {:?}", user_id, unknown);
            return Err(OnboardingError::UnknownGenres(unknown));
        }

        UserRepository::complete_onboarding(&self.db, user_id, &selection)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => OnboardingError::UserNotFound(user_id.to_string()),
                other => OnboardingError::Database(other),
            })?;

        tracing::info!("Onboarding completed for {} with genres {:?}", user_id, selection);
        Ok(())
    }
}
