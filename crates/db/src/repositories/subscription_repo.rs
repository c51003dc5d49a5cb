//! Repository for the `subscriptions` table.

use sqlx::PgPool;
use vidhub_core::types::DbId;

use crate::models::subscription::{Subscription, SubscriptionToggle};
use crate::models::user::PublicProfile;

const COLUMNS: &str = "id, subscriber_id, channel_id, created_at, updated_at";

/// Provides toggle and listing queries for channel subscriptions.
pub struct SubscriptionRepo;

impl SubscriptionRepo {
    /// Unsubscribe if subscribed, otherwise subscribe.
    ///
    /// Same shape as the like toggle: atomic delete, then an insert guarded
    /// by `uq_subscriptions_subscriber_channel`.
    pub async fn toggle(
        pool: &PgPool,
        subscriber_id: DbId,
        channel_id: DbId,
    ) -> Result<SubscriptionToggle, sqlx::Error> {
        let removed =
            sqlx::query("DELETE FROM subscriptions WHERE subscriber_id = $1 AND channel_id = $2")
                .bind(subscriber_id)
                .bind(channel_id)
                .execute(pool)
                .await?;

        if removed.rows_affected() > 0 {
            return Ok(SubscriptionToggle::Unsubscribed);
        }

        let query = format!(
            "INSERT INTO subscriptions (subscriber_id, channel_id)
             VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_subscriptions_subscriber_channel DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, Subscription>(&query)
            .bind(subscriber_id)
            .bind(channel_id)
            .fetch_optional(pool)
            .await?;

        match inserted {
            Some(subscription) => Ok(SubscriptionToggle::Subscribed(subscription)),
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM subscriptions WHERE subscriber_id = $1 AND channel_id = $2"
                );
                let current = sqlx::query_as::<_, Subscription>(&query)
                    .bind(subscriber_id)
                    .bind(channel_id)
                    .fetch_optional(pool)
                    .await?;
                Ok(SubscriptionToggle::settled(current))
            }
        }
    }

    /// Number of subscribers of `channel_id`.
    pub async fn count_subscribers(pool: &PgPool, channel_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM subscriptions WHERE channel_id = $1")
            .bind(channel_id)
            .fetch_one(pool)
            .await
    }

    /// Public profiles of everyone subscribed to `channel_id`, newest first.
    pub async fn list_subscribers(
        pool: &PgPool,
        channel_id: DbId,
    ) -> Result<Vec<PublicProfile>, sqlx::Error> {
        sqlx::query_as::<_, PublicProfile>(
            "SELECT u.id, u.username, u.email, u.full_name, u.avatar
             FROM subscriptions s
             JOIN users u ON u.id = s.subscriber_id
             WHERE s.channel_id = $1
             ORDER BY s.created_at DESC, s.id DESC",
        )
        .bind(channel_id)
        .fetch_all(pool)
        .await
    }

    /// Public profiles of every channel `subscriber_id` follows, newest first.
    pub async fn list_subscribed_channels(
        pool: &PgPool,
        subscriber_id: DbId,
    ) -> Result<Vec<PublicProfile>, sqlx::Error> {
        sqlx::query_as::<_, PublicProfile>(
            "SELECT u.id, u.username, u.email, u.full_name, u.avatar
             FROM subscriptions s
             JOIN users u ON u.id = s.channel_id
             WHERE s.subscriber_id = $1
             ORDER BY s.created_at DESC, s.id DESC",
        )
        .bind(subscriber_id)
        .fetch_all(pool)
        .await
    }
}
