//! Route definitions for the `/videos` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

/// Routes mounted at `/videos`.
///
/// ```text
/// GET    /                           -> list
/// POST   /                           -> publish (multipart)
/// GET    /{video_id}                 -> get_by_id
/// PATCH  /{video_id}                 -> update (multipart)
/// DELETE /{video_id}                 -> delete
/// PATCH  /toggle/publish/{video_id}  -> toggle_publish
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(video::list).post(video::publish))
        .route(
            "/{video_id}",
            get(video::get_by_id)
                .patch(video::update)
                .delete(video::delete),
        )
        .route("/toggle/publish/{video_id}", patch(video::toggle_publish))
}
