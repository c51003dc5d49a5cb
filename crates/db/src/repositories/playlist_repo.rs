//! Repository for the `playlists` and `playlist_videos` tables.
//!
//! A playlist's videos form an ordered set: insertion order is kept via the
//! `position` counter and duplicates are rejected by
//! `uq_playlist_videos_playlist_video`.

use std::collections::HashMap;

use sqlx::PgPool;
use vidhub_core::types::DbId;

use crate::models::playlist::{
    CreatePlaylist, Playlist, PlaylistVideoRow, PlaylistWithVideos, UpdatePlaylist,
};
use crate::models::video::VideoSummary;

const COLUMNS: &str = "id, name, description, owner_id, created_at, updated_at";

/// Provides CRUD and video-set operations for playlists.
pub struct PlaylistRepo;

impl PlaylistRepo {
    /// Insert a playlist and its initial videos in one transaction.
    ///
    /// Ids in `video_ids` that do not name an existing video are skipped.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePlaylist,
    ) -> Result<PlaylistWithVideos, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO playlists (name, description, owner_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let playlist = sqlx::query_as::<_, Playlist>(&insert_query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.owner_id)
            .fetch_one(&mut *tx)
            .await?;

        if !input.video_ids.is_empty() {
            sqlx::query(
                "INSERT INTO playlist_videos (playlist_id, video_id)
                 SELECT $1, v.id
                 FROM unnest($2::UUID[]) WITH ORDINALITY AS t(id, ord)
                 JOIN videos v ON v.id = t.id
                 ORDER BY t.ord
                 ON CONFLICT ON CONSTRAINT uq_playlist_videos_playlist_video DO NOTHING",
            )
            .bind(playlist.id)
            .bind(&input.video_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        let videos = Self::videos_of(pool, playlist.id).await?;
        Ok(PlaylistWithVideos { playlist, videos })
    }

    /// Find a playlist row by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Playlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playlists WHERE id = $1");
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a playlist by id with its video summaries.
    pub async fn find_with_videos(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PlaylistWithVideos>, sqlx::Error> {
        let Some(playlist) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let videos = Self::videos_of(pool, id).await?;
        Ok(Some(PlaylistWithVideos { playlist, videos }))
    }

    /// Video summaries of one playlist in insertion order.
    ///
    /// Entries whose video has been deleted are skipped.
    pub async fn videos_of(
        pool: &PgPool,
        playlist_id: DbId,
    ) -> Result<Vec<VideoSummary>, sqlx::Error> {
        sqlx::query_as::<_, VideoSummary>(
            "SELECT v.id, v.title, v.thumbnail, v.duration
             FROM playlist_videos pv
             JOIN videos v ON v.id = pv.video_id
             WHERE pv.playlist_id = $1
             ORDER BY pv.position",
        )
        .bind(playlist_id)
        .fetch_all(pool)
        .await
    }

    /// All playlists owned by `owner_id` with their videos, newest first.
    ///
    /// Videos for every playlist are fetched in a single query.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<PlaylistWithVideos>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM playlists WHERE owner_id = $1 ORDER BY created_at DESC, id DESC"
        );
        let playlists = sqlx::query_as::<_, Playlist>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await?;

        if playlists.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = playlists.iter().map(|p| p.id).collect();
        let rows = sqlx::query_as::<_, PlaylistVideoRow>(
            "SELECT pv.playlist_id, v.id, v.title, v.thumbnail, v.duration
             FROM playlist_videos pv
             JOIN videos v ON v.id = pv.video_id
             WHERE pv.playlist_id = ANY($1)
             ORDER BY pv.playlist_id, pv.position",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let mut by_playlist: HashMap<DbId, Vec<VideoSummary>> = HashMap::new();
        for row in rows {
            by_playlist.entry(row.playlist_id).or_default().push(row.video);
        }

        Ok(playlists
            .into_iter()
            .map(|playlist| {
                let videos = by_playlist.remove(&playlist.id).unwrap_or_default();
                PlaylistWithVideos { playlist, videos }
            })
            .collect())
    }

    /// Apply a partial update. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlaylist,
    ) -> Result<Option<Playlist>, sqlx::Error> {
        let query = format!(
            "UPDATE playlists SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a playlist and its video entries.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM playlists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Add a video to the set. Returns `false` if it was already present.
    pub async fn add_video(
        pool: &PgPool,
        playlist_id: DbId,
        video_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO playlist_videos (playlist_id, video_id)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_playlist_videos_playlist_video DO NOTHING",
        )
        .bind(playlist_id)
        .bind(video_id)
        .execute(pool)
        .await?;

        let inserted = result.rows_affected() > 0;
        if inserted {
            Self::touch(pool, playlist_id).await?;
        }
        Ok(inserted)
    }

    /// Remove a video from the set. Returns `false` if it was not present.
    pub async fn remove_video(
        pool: &PgPool,
        playlist_id: DbId,
        video_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM playlist_videos WHERE playlist_id = $1 AND video_id = $2")
                .bind(playlist_id)
                .bind(video_id)
                .execute(pool)
                .await?;

        let removed = result.rows_affected() > 0;
        if removed {
            Self::touch(pool, playlist_id).await?;
        }
        Ok(removed)
    }

    async fn touch(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE playlists SET updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
