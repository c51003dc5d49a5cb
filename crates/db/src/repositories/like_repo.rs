//! Repository for the `likes` table.
//!
//! At most one like exists per (user, target). The toggle relies on the
//! `uq_likes_owner_target` constraint rather than a read-then-write, so two
//! concurrent "like" requests cannot both insert.

use sqlx::PgPool;
use vidhub_core::likes::{LikeTarget, LikeTargetKind};
use vidhub_core::types::DbId;

use crate::models::like::{Like, LikeToggle, LikedVideo};

const COLUMNS: &str = "id, liked_by, target_kind, target_id, created_at, updated_at";

/// Provides toggle, lookup and aggregate queries for likes.
pub struct LikeRepo;

impl LikeRepo {
    /// Find the like `liked_by` placed on `target`, if any.
    pub async fn find(
        pool: &PgPool,
        liked_by: DbId,
        target: LikeTarget,
    ) -> Result<Option<Like>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM likes
             WHERE liked_by = $1 AND target_kind = $2 AND target_id = $3"
        );
        sqlx::query_as::<_, Like>(&query)
            .bind(liked_by)
            .bind(target.kind().as_str())
            .bind(target.id())
            .fetch_optional(pool)
            .await
    }

    /// Remove the like if present, otherwise create it.
    ///
    /// Each step is a single atomic statement. If the insert loses a race
    /// against a concurrent insert for the same pair, the outcome reflects
    /// the row stored afterwards, or "unliked" if it is already gone.
    pub async fn toggle(
        pool: &PgPool,
        liked_by: DbId,
        target: LikeTarget,
    ) -> Result<LikeToggle, sqlx::Error> {
        let kind = target.kind().as_str();

        let removed = sqlx::query(
            "DELETE FROM likes WHERE liked_by = $1 AND target_kind = $2 AND target_id = $3",
        )
        .bind(liked_by)
        .bind(kind)
        .bind(target.id())
        .execute(pool)
        .await?;

        if removed.rows_affected() > 0 {
            return Ok(LikeToggle::Unliked);
        }

        let query = format!(
            "INSERT INTO likes (liked_by, target_kind, target_id)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_likes_owner_target DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, Like>(&query)
            .bind(liked_by)
            .bind(kind)
            .bind(target.id())
            .fetch_optional(pool)
            .await?;

        match inserted {
            Some(like) => Ok(LikeToggle::Liked(like)),
            None => {
                tracing::debug!(%liked_by, target_kind = kind, target_id = %target.id(), "Concurrent like won the insert");
                Ok(LikeToggle::settled(Self::find(pool, liked_by, target).await?))
            }
        }
    }

    /// Videos liked by `liked_by`, most recently liked first.
    ///
    /// Likes whose video has since been deleted are skipped.
    pub async fn list_liked_videos(
        pool: &PgPool,
        liked_by: DbId,
    ) -> Result<Vec<LikedVideo>, sqlx::Error> {
        sqlx::query_as::<_, LikedVideo>(
            "SELECT l.id AS like_id, l.created_at AS liked_at,
                    v.id, v.video_file, v.thumbnail, v.title, v.description, v.duration,
                    v.is_published, v.owner_id, v.created_at, v.updated_at
             FROM likes l
             JOIN videos v ON v.id = l.target_id
             WHERE l.liked_by = $1 AND l.target_kind = $2
             ORDER BY l.created_at DESC, l.id DESC",
        )
        .bind(liked_by)
        .bind(LikeTargetKind::Video.as_str())
        .fetch_all(pool)
        .await
    }

    /// Number of video likes whose target is one of `video_ids`.
    pub async fn count_for_videos(pool: &PgPool, video_ids: &[DbId]) -> Result<i64, sqlx::Error> {
        if video_ids.is_empty() {
            return Ok(0);
        }
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM likes WHERE target_kind = $1 AND target_id = ANY($2)",
        )
        .bind(LikeTargetKind::Video.as_str())
        .bind(video_ids)
        .fetch_one(pool)
        .await
    }
}
