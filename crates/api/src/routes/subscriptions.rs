//! Route definitions for the `/subscriptions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::subscription;
use crate::state::AppState;

/// Routes mounted at `/subscriptions`.
///
/// ```text
/// POST /c/{channel_id}     -> toggle
/// GET  /c/{channel_id}     -> list_subscribers
/// GET  /u/{subscriber_id}  -> list_subscribed_channels
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/c/{channel_id}",
            get(subscription::list_subscribers).post(subscription::toggle),
        )
        .route(
            "/u/{subscriber_id}",
            get(subscription::list_subscribed_channels),
        )
}
