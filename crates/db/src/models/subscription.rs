//! Subscription rows and toggle outcomes.

use serde::Serialize;
use sqlx::FromRow;
use vidhub_core::types::{DbId, Timestamp};

/// A row from the `subscriptions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subscription {
    pub id: DbId,
    pub subscriber_id: DbId,
    pub channel_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Outcome of a subscription toggle.
#[derive(Debug, Clone)]
pub enum SubscriptionToggle {
    Subscribed(Subscription),
    Unsubscribed,
}

impl SubscriptionToggle {
    /// Outcome after an insert lost to a concurrent one; see
    /// [`LikeToggle::settled`](crate::models::like::LikeToggle::settled).
    pub fn settled(current: Option<Subscription>) -> Self {
        current.map_or(Self::Unsubscribed, Self::Subscribed)
    }
}
