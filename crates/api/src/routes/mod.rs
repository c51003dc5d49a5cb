pub mod comments;
pub mod dashboard;
pub mod health;
pub mod likes;
pub mod playlists;
pub mod subscriptions;
pub mod tweets;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /videos                                   list, publish
/// /videos/{video_id}                        get, update, delete
/// /videos/toggle/publish/{video_id}         toggle publish flag
///
/// /comments/{video_id}                      list, create
/// /comments/c/{comment_id}                  update, delete
///
/// /likes/toggle/{v|c|t}/{id}                toggle like
/// /likes/videos                             caller's liked videos
///
/// /playlists                                create
/// /playlists/user/{user_id}                 list by owner
/// /playlists/{playlist_id}                  get, update, delete
/// /playlists/{add|remove}/{video_id}/{playlist_id}
///
/// /subscriptions/c/{channel_id}             toggle, list subscribers
/// /subscriptions/u/{subscriber_id}          list subscribed channels
///
/// /tweets                                   create
/// /tweets/user/{user_id}                    list by owner
/// /tweets/{tweet_id}                        update, delete
///
/// /dashboard/stats                          channel statistics
/// /dashboard/videos                         channel videos
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/videos", videos::router())
        .nest("/comments", comments::router())
        .nest("/likes", likes::router())
        .nest("/playlists", playlists::router())
        .nest("/subscriptions", subscriptions::router())
        .nest("/tweets", tweets::router())
        .nest("/dashboard", dashboard::router())
}
