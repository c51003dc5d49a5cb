//! Route definitions for the `/likes` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::like;
use crate::state::AppState;

/// Routes mounted at `/likes`.
///
/// ```text
/// POST /toggle/v/{video_id}    -> toggle_video_like
/// POST /toggle/c/{comment_id}  -> toggle_comment_like
/// POST /toggle/t/{tweet_id}    -> toggle_tweet_like
/// GET  /videos                 -> liked_videos
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/toggle/v/{video_id}", post(like::toggle_video_like))
        .route("/toggle/c/{comment_id}", post(like::toggle_comment_like))
        .route("/toggle/t/{tweet_id}", post(like::toggle_tweet_like))
        .route("/videos", get(like::liked_videos))
}
