//! Handlers for the `/subscriptions` resource.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use vidhub_core::error::CoreError;
use vidhub_core::ids::parse_id;
use vidhub_db::models::subscription::SubscriptionToggle;
use vidhub_db::models::user::PublicProfile;
use vidhub_db::repositories::{SubscriptionRepo, UserRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/subscriptions/c/{channel_id}
///
/// Subscribes the caller, or unsubscribes if already subscribed.
pub async fn toggle(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
) -> AppResult<Response> {
    let channel_id = parse_id(&channel_id, "channel")?;

    if channel_id == auth.user_id {
        return Err(CoreError::validation("You cannot subscribe to your own channel").into());
    }
    if !UserRepo::exists(&state.pool, channel_id).await? {
        return Err(CoreError::not_found("Channel", channel_id).into());
    }

    Ok(
        match SubscriptionRepo::toggle(&state.pool, auth.user_id, channel_id).await? {
            SubscriptionToggle::Subscribed(subscription) => {
                ApiResponse::created(subscription, "Subscribed successfully").into_response()
            }
            SubscriptionToggle::Unsubscribed => {
                ApiResponse::empty("Unsubscribed successfully").into_response()
            }
        },
    )
}

/// GET /api/v1/subscriptions/c/{channel_id}
pub async fn list_subscribers(
    State(state): State<AppState>,
    Path(channel_id): Path<String>,
) -> AppResult<ApiResponse<Vec<PublicProfile>>> {
    let channel_id = parse_id(&channel_id, "channel")?;
    let subscribers = SubscriptionRepo::list_subscribers(&state.pool, channel_id).await?;
    Ok(ApiResponse::ok(subscribers, "Subscribers fetched successfully"))
}

/// GET /api/v1/subscriptions/u/{subscriber_id}
pub async fn list_subscribed_channels(
    State(state): State<AppState>,
    Path(subscriber_id): Path<String>,
) -> AppResult<ApiResponse<Vec<PublicProfile>>> {
    let subscriber_id = parse_id(&subscriber_id, "subscriber")?;
    let channels = SubscriptionRepo::list_subscribed_channels(&state.pool, subscriber_id).await?;
    Ok(ApiResponse::ok(channels, "Subscribed channels fetched successfully"))
}
