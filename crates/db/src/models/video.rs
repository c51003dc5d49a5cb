//! Video entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use vidhub_core::types::{DbId, Timestamp};

use crate::models::user::OwnerProfile;

/// A row from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub video_file: String,
    pub thumbnail: String,
    pub title: String,
    pub description: String,
    /// Whole seconds.
    pub duration: i32,
    pub is_published: bool,
    pub owner_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A video joined with its owner's public profile.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoWithOwner {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub video: Video,
    #[sqlx(flatten)]
    pub owner: OwnerProfile,
}

/// Compact projection used inside playlists.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoSummary {
    pub id: DbId,
    pub title: String,
    pub thumbnail: String,
    pub duration: i32,
}

/// Projection returned by the channel dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChannelVideo {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub duration: i32,
    pub is_published: bool,
    pub created_at: Timestamp,
}

/// Validated input for publishing a video. Media references are the
/// durable URLs returned by object storage.
#[derive(Debug, Clone)]
pub struct CreateVideo {
    pub video_file: String,
    pub thumbnail: String,
    pub title: String,
    pub description: String,
    pub duration: i32,
    pub owner_id: DbId,
}

/// Partial update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateVideo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

impl UpdateVideo {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.thumbnail.is_none()
    }
}

/// Filter / sort / page inputs for the video listing.
#[derive(Debug, Clone, Default)]
pub struct VideoListFilter {
    /// Pre-built `ILIKE` pattern, see `vidhub_core::listing::contains_pattern`.
    pub title_pattern: Option<String>,
    pub owner_id: Option<DbId>,
    pub sort_field: vidhub_core::listing::VideoSortField,
    pub sort_direction: vidhub_core::listing::SortDirection,
}
