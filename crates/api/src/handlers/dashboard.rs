//! Handlers for the caller's channel dashboard.

use axum::extract::State;
use vidhub_db::models::dashboard::ChannelStats;
use vidhub_db::models::video::ChannelVideo;
use vidhub_db::repositories::{DashboardRepo, VideoRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/stats
pub async fn stats(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<ChannelStats>> {
    let stats = DashboardRepo::channel_stats(&state.pool, auth.user_id).await?;
    Ok(ApiResponse::ok(stats, "Channel stats fetched successfully"))
}

/// GET /api/v1/dashboard/videos
pub async fn videos(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<ChannelVideo>>> {
    let videos = VideoRepo::list_for_channel(&state.pool, auth.user_id).await?;
    Ok(ApiResponse::ok(videos, "Channel videos fetched successfully"))
}
