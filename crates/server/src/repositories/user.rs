use sqlx::SqlitePool;

use crate::models::NewUser;

pub struct UserRepository;

impl UserRepository {
    /// Insert a user, or refresh its profile fields if it already exists
    pub async fn create(pool: &SqlitePool, user: &NewUser) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, is_anonymous)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                email = excluded.email,
                is_anonymous = excluded.is_anonymous
            "#,
        )
        .bind(&user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.is_anonymous)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Get the onboarding completion flag, `None` if the user does not exist
    pub async fn get_onboarding_completed(
        pool: &SqlitePool,
        user_id: &str,
    ) -> Result<Option<bool>, sqlx::Error> {
        let row: Option<(bool,)> =
            sqlx::query_as("SELECT onboarding_completed FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(pool)
                .await?;
        Ok(row.map(|(completed,)| completed))
    }

    /// Get the user's selected genre ids in selection order
    pub async fn get_genres(pool: &SqlitePool, user_id: &str) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT genre_id FROM user_genres WHERE user_id = $1 ORDER BY position",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// Replace the genre selection and mark onboarding as completed.
    ///
    /// Runs in one transaction so a failed insert leaves the previous
    /// selection untouched.
    pub async fn complete_onboarding(
        pool: &SqlitePool,
        user_id: &str,
        genres: &[String],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let updated = sqlx::query("UPDATE users SET onboarding_completed = 1 WHERE id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
        if updated.rows_affected() == 0 {
            return Err(sqlx::Error::RowNotFound);
        }

        sqlx::query("DELETE FROM user_genres WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        for (position, genre_id) in genres.iter().enumerate() {
            sqlx::query(
                "INSERT INTO user_genres (user_id, genre_id, position) VALUES ($1, $2, $3)",
            )
            .bind(user_id)
            .bind(genre_id)
            .bind(position as i64)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
