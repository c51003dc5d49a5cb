//! Like rows, the tagged target they carry, and toggle outcomes.

use serde::{Serialize, Serializer};
use sqlx::FromRow;
use vidhub_core::types::{DbId, Timestamp};

use crate::models::video::Video;

/// A row from the `likes` table.
///
/// Serialized with the target spelled out under its own key
/// (`"video": "<id>"`, `"comment": ...`, `"tweet": ...`).
#[derive(Debug, Clone, FromRow)]
pub struct Like {
    pub id: DbId,
    pub liked_by: DbId,
    pub target_kind: String,
    pub target_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Serialize for Like {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(6))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("liked_by", &self.liked_by)?;
        map.serialize_entry("target_kind", &self.target_kind)?;
        map.serialize_entry(self.target_kind.as_str(), &self.target_id)?;
        map.serialize_entry("created_at", &self.created_at)?;
        map.serialize_entry("updated_at", &self.updated_at)?;
        map.end()
    }
}

/// Outcome of a like toggle.
#[derive(Debug, Clone)]
pub enum LikeToggle {
    Liked(Like),
    Unliked,
}

impl LikeToggle {
    /// Outcome after an insert lost to a concurrent one: whatever row is
    /// stored now. If that row was already removed again, nothing is liked.
    pub fn settled(current: Option<Like>) -> Self {
        current.map_or(Self::Unliked, Self::Liked)
    }
}

/// A like by the caller joined with the full liked video.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LikedVideo {
    pub like_id: DbId,
    pub liked_at: Timestamp,
    #[sqlx(flatten)]
    pub video: Video,
}
