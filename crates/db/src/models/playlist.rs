//! Playlist entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use vidhub_core::types::{DbId, Timestamp};

use crate::models::video::VideoSummary;

/// A row from the `playlists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Playlist {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub owner_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A playlist with its videos in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistWithVideos {
    #[serde(flatten)]
    pub playlist: Playlist,
    pub videos: Vec<VideoSummary>,
}

/// Validated input for creating a playlist.
#[derive(Debug, Clone)]
pub struct CreatePlaylist {
    pub name: String,
    pub description: String,
    /// Already de-duplicated; ids with no matching video are skipped on insert.
    pub video_ids: Vec<DbId>,
    pub owner_id: DbId,
}

/// Partial update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlaylist {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A `playlist_videos` row joined with the video summary, used when
/// loading several playlists at once.
#[derive(Debug, Clone, FromRow)]
pub struct PlaylistVideoRow {
    pub playlist_id: DbId,
    #[sqlx(flatten)]
    pub video: VideoSummary,
}
