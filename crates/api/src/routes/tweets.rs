//! Route definitions for the `/tweets` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::tweet;
use crate::state::AppState;

/// Routes mounted at `/tweets`.
///
/// ```text
/// POST   /                 -> create
/// GET    /user/{user_id}   -> list_by_user
/// PATCH  /{tweet_id}       -> update
/// DELETE /{tweet_id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(tweet::create))
        .route("/user/{user_id}", get(tweet::list_by_user))
        .route("/{tweet_id}", patch(tweet::update).delete(tweet::delete))
}
