//! Handlers for the `/comments` resource.

use axum::extract::{Path, Query, State};
use serde::Deserialize;
use validator::Validate;
use vidhub_core::error::CoreError;
use vidhub_core::ids::parse_id;
use vidhub_core::ownership::ensure_owner;
use vidhub_core::pagination::Page;
use vidhub_core::text::require_text;
use vidhub_core::types::DbId;
use vidhub_db::models::comment::{Comment, CommentWithOwner};
use vidhub_db::repositories::{CommentRepo, VideoRepo};

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::{ApiResponse, Empty};
use crate::state::AppState;

const CONTENT_REQUIRED: &str = "Comment content is required";
const FORBIDDEN: &str = "You are not authorized to modify this comment";

/// Request body for creating or editing a comment.
#[derive(Debug, Deserialize, Validate)]
pub struct CommentBody {
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub content: Option<String>,
}

async fn ensure_video_exists(state: &AppState, id: DbId) -> AppResult<()> {
    if VideoRepo::exists(&state.pool, id).await? {
        Ok(())
    } else {
        Err(CoreError::not_found("Video", id).into())
    }
}

async fn load_owned(state: &AppState, raw_id: &str, caller: DbId) -> AppResult<Comment> {
    let id = parse_id(raw_id, "comment")?;
    let comment = CommentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Comment", id))?;
    ensure_owner(comment.owner_id, caller, FORBIDDEN)?;
    Ok(comment)
}

/// GET /api/v1/comments/{video_id}
///
/// Newest first, each with the author's public profile.
pub async fn list_by_video(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    Query(params): Query<PaginationParams>,
) -> AppResult<ApiResponse<Page<CommentWithOwner>>> {
    let video_id = parse_id(&video_id, "video")?;
    ensure_video_exists(&state, video_id).await?;

    let page = CommentRepo::list_by_video(&state.pool, video_id, params.page_request()).await?;
    Ok(ApiResponse::ok(page, "Comments fetched successfully"))
}

/// POST /api/v1/comments/{video_id}
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    ValidatedJson(body): ValidatedJson<CommentBody>,
) -> AppResult<ApiResponse<Comment>> {
    let video_id = parse_id(&video_id, "video")?;
    let content = require_text(body.content.as_deref(), CONTENT_REQUIRED)?;
    ensure_video_exists(&state, video_id).await?;

    let comment = CommentRepo::create(&state.pool, video_id, auth.user_id, &content).await?;
    Ok(ApiResponse::created(comment, "Comment added successfully"))
}

/// PATCH /api/v1/comments/c/{comment_id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    ValidatedJson(body): ValidatedJson<CommentBody>,
) -> AppResult<ApiResponse<Comment>> {
    let comment = load_owned(&state, &comment_id, auth.user_id).await?;
    let content = require_text(body.content.as_deref(), CONTENT_REQUIRED)?;

    let updated = CommentRepo::update_content(&state.pool, comment.id, &content)
        .await?
        .ok_or_else(|| CoreError::not_found("Comment", comment.id))?;
    Ok(ApiResponse::ok(updated, "Comment updated successfully"))
}

/// DELETE /api/v1/comments/c/{comment_id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> AppResult<ApiResponse<Empty>> {
    let comment = load_owned(&state, &comment_id, auth.user_id).await?;

    if !CommentRepo::delete(&state.pool, comment.id).await? {
        return Err(CoreError::not_found("Comment", comment.id).into());
    }
    Ok(ApiResponse::empty("Comment deleted successfully"))
}
