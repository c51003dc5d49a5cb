//! Channel statistics.

use serde::Serialize;

/// Aggregate counters for one channel (user).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChannelStats {
    pub total_videos: i64,
    pub total_subscribers: i64,
    /// Likes on the channel's videos only; comment and tweet likes are not
    /// counted.
    pub total_likes: i64,
}
