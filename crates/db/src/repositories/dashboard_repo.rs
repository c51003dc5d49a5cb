//! Channel statistics.

use sqlx::PgPool;
use vidhub_core::types::DbId;

use crate::models::dashboard::ChannelStats;
use crate::repositories::{LikeRepo, SubscriptionRepo, VideoRepo};

/// Computes per-channel aggregates from independent queries.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Video count, subscriber count and likes on the channel's videos.
    ///
    /// The like total is a two-step composition: collect the channel's video
    /// ids, then count video likes against that set. The steps are not
    /// wrapped in a transaction.
    pub async fn channel_stats(pool: &PgPool, channel_id: DbId) -> Result<ChannelStats, sqlx::Error> {
        let total_videos = VideoRepo::count_by_owner(pool, channel_id).await?;
        let total_subscribers = SubscriptionRepo::count_subscribers(pool, channel_id).await?;

        let video_ids = VideoRepo::ids_by_owner(pool, channel_id).await?;
        let total_likes = LikeRepo::count_for_videos(pool, &video_ids).await?;

        Ok(ChannelStats {
            total_videos,
            total_subscribers,
            total_likes,
        })
    }
}
