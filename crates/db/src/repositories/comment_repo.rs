//! Repository for the `comments` table.

use sqlx::PgPool;
use vidhub_core::pagination::{Page, PageRequest};
use vidhub_core::types::DbId;

use crate::models::comment::{Comment, CommentWithOwner};

const COLUMNS: &str = "id, content, video_id, owner_id, created_at, updated_at";

/// Provides CRUD and per-video listing for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment on `video_id` authored by `owner_id`.
    pub async fn create(
        pool: &PgPool,
        video_id: DbId,
        owner_id: DbId,
        content: &str,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (content, video_id, owner_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(content)
            .bind(video_id)
            .bind(owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a comment with `id` exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM comments WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Comments on one video with author profiles, newest first.
    pub async fn list_by_video(
        pool: &PgPool,
        video_id: DbId,
        page: PageRequest,
    ) -> Result<Page<CommentWithOwner>, sqlx::Error> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM comments c JOIN users u ON u.id = c.owner_id WHERE c.video_id = $1",
        )
        .bind(video_id)
        .fetch_one(pool)
        .await?;

        let items = sqlx::query_as::<_, CommentWithOwner>(
            "SELECT c.id, c.content, c.video_id, c.owner_id, c.created_at, c.updated_at,
                    u.username AS owner_username, u.email AS owner_email
             FROM comments c
             JOIN users u ON u.id = c.owner_id
             WHERE c.video_id = $1
             ORDER BY c.created_at DESC, c.id DESC
             LIMIT $2 OFFSET $3",
        )
        .bind(video_id)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(Page::new(items, total, page))
    }

    /// Replace the content of a comment. Returns `None` if it does not exist.
    pub async fn update_content(
        pool: &PgPool,
        id: DbId,
        content: &str,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET content = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a comment. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
