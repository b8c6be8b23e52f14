use sqlx::SqlitePool;

use crate::models::Identity;

pub struct SessionRepository;

impl SessionRepository {
    /// Resolve an unexpired session token to the identity behind it
    pub async fn find_identity(
        pool: &SqlitePool,
        token: &str,
        now: i64,
    ) -> Result<Option<Identity>, sqlx::Error> {
        let row: Option<(String, bool)> = sqlx::query_as(
            r#"
            SELECT u.id, u.is_anonymous
            FROM sessions s
            INNER JOIN users u ON s.user_id = u.id
            WHERE s.token = $1 AND s.expires_at > $2
            "#,
        )
        .bind(token)
        .bind(now)
        .fetch_optional(pool)
        .await?;

        Ok(row.map(|(user_id, is_anonymous)| Identity {
            user_id,
            is_anonymous,
        }))
    }

    /// Store a session issued by the auth provider
    pub async fn create(
        pool: &SqlitePool,
        token: &str,
        user_id: &str,
        expires_at: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT OR REPLACE INTO sessions (token, user_id, expires_at) VALUES ($1, $2, $3)",
        )
        .bind(token)
        .bind(user_id)
        .bind(expires_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Delete expired sessions
    pub async fn cleanup(pool: &SqlitePool, now: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= $1")
            .bind(now)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
