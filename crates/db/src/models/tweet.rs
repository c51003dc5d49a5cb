//! Tweet entity model.

use serde::Serialize;
use sqlx::FromRow;
use vidhub_core::types::{DbId, Timestamp};

/// A row from the `tweets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tweet {
    pub id: DbId,
    pub content: String,
    pub owner_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
