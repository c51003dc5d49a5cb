//! Route definitions for the `/playlists` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::playlist;
use crate::state::AppState;

/// Routes mounted at `/playlists`.
///
/// ```text
/// POST   /                                 -> create
/// GET    /user/{user_id}                   -> list_by_user
/// GET    /{playlist_id}                    -> get_by_id
/// PATCH  /{playlist_id}                    -> update
/// DELETE /{playlist_id}                    -> delete
/// PATCH  /add/{video_id}/{playlist_id}     -> add_video
/// PATCH  /remove/{video_id}/{playlist_id}  -> remove_video
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(playlist::create))
        .route("/user/{user_id}", get(playlist::list_by_user))
        .route(
            "/{playlist_id}",
            get(playlist::get_by_id)
                .patch(playlist::update)
                .delete(playlist::delete),
        )
        .route("/add/{video_id}/{playlist_id}", patch(playlist::add_video))
        .route(
            "/remove/{video_id}/{playlist_id}",
            patch(playlist::remove_video),
        )
}
