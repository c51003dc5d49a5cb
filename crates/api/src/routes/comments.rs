//! Route definitions for the `/comments` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::comment;
use crate::state::AppState;

/// Routes mounted at `/comments`.
///
/// ```text
/// GET    /{video_id}       -> list_by_video
/// POST   /{video_id}       -> create
/// PATCH  /c/{comment_id}   -> update
/// DELETE /c/{comment_id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{video_id}",
            get(comment::list_by_video).post(comment::create),
        )
        .route(
            "/c/{comment_id}",
            patch(comment::update).delete(comment::delete),
        )
}
