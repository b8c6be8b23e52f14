use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to connect to database '{url}': {source} (check if data directory is writable)")]
    Connection { url: String, source: sqlx::Error },
    #[error("Failed to run database migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, DatabaseError> {
    let connection_error = |e: sqlx::Error| DatabaseError::Connection {
        url: database_url.to_string(),
        source: e,
    };

    // Readers proceed while a write is in flight; writers wait for the lock
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(connection_error)?
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(connection_error)?;

    sqlx::migrate!("../../migrations").run(&pool).await?;

    Ok(pool)
}

/// In-memory database with migrations applied.
///
/// A single connection that never idles out, since each SQLite memory
/// connection is its own database.
#[cfg(test)]
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("../../migrations").run(&pool).await.unwrap();
    pool
}
