//! Repository for the `tweets` table.

use sqlx::PgPool;
use vidhub_core::types::DbId;

use crate::models::tweet::Tweet;

const COLUMNS: &str = "id, content, owner_id, created_at, updated_at";

/// Provides CRUD operations for tweets.
pub struct TweetRepo;

impl TweetRepo {
    pub async fn create(pool: &PgPool, owner_id: DbId, content: &str) -> Result<Tweet, sqlx::Error> {
        let query = format!(
            "INSERT INTO tweets (content, owner_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tweet>(&query)
            .bind(content)
            .bind(owner_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tweet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tweets WHERE id = $1");
        sqlx::query_as::<_, Tweet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM tweets WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// All tweets by `owner_id`, newest first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Tweet>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tweets WHERE owner_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Tweet>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update_content(
        pool: &PgPool,
        id: DbId,
        content: &str,
    ) -> Result<Option<Tweet>, sqlx::Error> {
        let query = format!(
            "UPDATE tweets SET content = $2, updated_at = NOW() WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tweet>(&query)
            .bind(id)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tweets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
