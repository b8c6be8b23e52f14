use sqlx::SqlitePool;

use crate::models::Genre;

pub struct GenreRepository;

impl GenreRepository {
    /// Get the whole catalog in display order
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT id, label FROM genres ORDER BY position, id")
            .fetch_all(pool)
            .await
    }

    /// Get all valid genre ids
    pub async fn list_ids(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as("SELECT id FROM genres")
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}
