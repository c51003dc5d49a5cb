//! Handlers for the `/likes` resource.
//!
//! The three toggle endpoints share [`toggle`]; only the target kind differs.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use vidhub_core::error::CoreError;
use vidhub_core::ids::parse_id;
use vidhub_core::likes::{LikeTarget, LikeTargetKind};
use vidhub_db::models::like::{LikeToggle, LikedVideo};
use vidhub_db::repositories::{CommentRepo, LikeRepo, TweetRepo, VideoRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

async fn toggle(
    state: &AppState,
    auth: AuthUser,
    raw_id: &str,
    kind: LikeTargetKind,
) -> AppResult<Response> {
    let id = parse_id(raw_id, kind.as_str())?;

    let exists = match kind {
        LikeTargetKind::Video => VideoRepo::exists(&state.pool, id).await?,
        LikeTargetKind::Comment => CommentRepo::exists(&state.pool, id).await?,
        LikeTargetKind::Tweet => TweetRepo::exists(&state.pool, id).await?,
    };
    if !exists {
        return Err(CoreError::not_found(kind.label(), id).into());
    }

    let outcome = LikeRepo::toggle(&state.pool, auth.user_id, LikeTarget::new(kind, id)).await?;
    tracing::debug!(user_id = %auth.user_id, %kind, target_id = %id, ?outcome, "Like toggled");

    let label = kind.label();
    Ok(match outcome {
        LikeToggle::Liked(like) => {
            ApiResponse::created(like, format!("{label} liked successfully")).into_response()
        }
        LikeToggle::Unliked => {
            ApiResponse::empty(format!("{label} unliked successfully")).into_response()
        }
    })
}

/// POST /api/v1/likes/toggle/v/{video_id}
pub async fn toggle_video_like(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> AppResult<Response> {
    toggle(&state, auth, &video_id, LikeTargetKind::Video).await
}

/// POST /api/v1/likes/toggle/c/{comment_id}
pub async fn toggle_comment_like(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> AppResult<Response> {
    toggle(&state, auth, &comment_id, LikeTargetKind::Comment).await
}

/// POST /api/v1/likes/toggle/t/{tweet_id}
pub async fn toggle_tweet_like(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(tweet_id): Path<String>,
) -> AppResult<Response> {
    toggle(&state, auth, &tweet_id, LikeTargetKind::Tweet).await
}

/// GET /api/v1/likes/videos
///
/// The caller's liked videos, most recent like first.
pub async fn liked_videos(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<LikedVideo>>> {
    let videos = LikeRepo::list_liked_videos(&state.pool, auth.user_id).await?;
    Ok(ApiResponse::ok(videos, "Liked videos fetched successfully"))
}
