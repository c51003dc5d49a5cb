//! User rows and the public profile attached to joined read models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vidhub_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for provisioning a user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar: Option<String>,
}

/// Owner fields exposed next to videos and comments.
///
/// Selected as `owner_username` / `owner_email` so it can be flattened into
/// a joined row without clashing with the outer entity's columns.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OwnerProfile {
    #[sqlx(rename = "owner_username")]
    pub username: String,
    #[sqlx(rename = "owner_email")]
    pub email: String,
}

/// Standalone public profile, used by subscription listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PublicProfile {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar: Option<String>,
}
