//! Repository for the `videos` table.

use sqlx::PgPool;
use vidhub_core::listing::order_by;
use vidhub_core::pagination::{Page, PageRequest};
use vidhub_core::types::DbId;

use crate::models::video::{
    ChannelVideo, CreateVideo, UpdateVideo, Video, VideoListFilter, VideoWithOwner,
};

/// Column list shared across single-table queries.
const COLUMNS: &str = "id, video_file, thumbnail, title, description, duration, \
                       is_published, owner_id, created_at, updated_at";

/// Same columns qualified with the `v` alias, for joined queries.
const V_COLUMNS: &str = "v.id, v.video_file, v.thumbnail, v.title, v.description, v.duration, \
                         v.is_published, v.owner_id, v.created_at, v.updated_at";

/// Owner profile columns for joins against `users u`.
const OWNER_COLUMNS: &str = "u.username AS owner_username, u.email AS owner_email";

/// Shared filter for listing and counting. `$1` is an `ILIKE` pattern,
/// `$2` an owner id; either may be NULL.
const LIST_FILTER: &str = "($1::TEXT IS NULL OR v.title ILIKE $1) \
                           AND ($2::UUID IS NULL OR v.owner_id = $2)";

/// Provides CRUD and listing operations for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos (video_file, thumbnail, title, description, duration, owner_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&input.video_file)
            .bind(&input.thumbnail)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.duration)
            .bind(input.owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a video by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a video by id with its owner's public profile attached.
    pub async fn find_with_owner(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<VideoWithOwner>, sqlx::Error> {
        let query = format!(
            "SELECT {V_COLUMNS}, {OWNER_COLUMNS}
             FROM videos v
             JOIN users u ON u.id = v.owner_id
             WHERE v.id = $1"
        );
        sqlx::query_as::<_, VideoWithOwner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a video with `id` exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM videos WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Filtered, sorted, paginated listing joined with owner profiles.
    pub async fn list(
        pool: &PgPool,
        filter: &VideoListFilter,
        page: PageRequest,
    ) -> Result<Page<VideoWithOwner>, sqlx::Error> {
        let count_query = format!("SELECT COUNT(*) FROM videos v WHERE {LIST_FILTER}");
        let total: i64 = sqlx::query_scalar(&count_query)
            .bind(&filter.title_pattern)
            .bind(filter.owner_id)
            .fetch_one(pool)
            .await?;

        let order = order_by(filter.sort_field, filter.sort_direction);
        let query = format!(
            "SELECT {V_COLUMNS}, {OWNER_COLUMNS}
             FROM videos v
             JOIN users u ON u.id = v.owner_id
             WHERE {LIST_FILTER}
             ORDER BY {order}
             LIMIT $3 OFFSET $4"
        );
        let items = sqlx::query_as::<_, VideoWithOwner>(&query)
            .bind(&filter.title_pattern)
            .bind(filter.owner_id)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        Ok(Page::new(items, total, page))
    }

    /// Apply a partial update. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVideo,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                thumbnail = COALESCE($4, thumbnail),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.thumbnail)
            .fetch_optional(pool)
            .await
    }

    /// Flip `is_published` in a single statement.
    pub async fn toggle_publish(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET is_published = NOT is_published, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a video. Returns `true` if a row was removed.
    ///
    /// Comments, likes and playlist entries that reference the video are
    /// left in place.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of videos owned by `owner_id`.
    pub async fn count_by_owner(pool: &PgPool, owner_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM videos WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(pool)
            .await
    }

    /// Ids of every video owned by `owner_id`.
    pub async fn ids_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM videos WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Dashboard projection of the owner's videos, newest first.
    pub async fn list_for_channel(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<ChannelVideo>, sqlx::Error> {
        sqlx::query_as::<_, ChannelVideo>(
            "SELECT id, title, description, thumbnail, duration, is_published, created_at
             FROM videos
             WHERE owner_id = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await
    }
}
