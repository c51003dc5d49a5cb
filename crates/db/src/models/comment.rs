//! Comment entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use vidhub_core::types::{DbId, Timestamp};

use crate::models::user::OwnerProfile;

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub content: String,
    pub video_id: DbId,
    pub owner_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A comment joined with its author's public profile.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommentWithOwner {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub comment: Comment,
    #[sqlx(flatten)]
    pub owner: OwnerProfile,
}
