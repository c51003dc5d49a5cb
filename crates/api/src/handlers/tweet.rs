//! Handlers for the `/tweets` resource.

use axum::extract::{Path, State};
use serde::Deserialize;
use validator::Validate;
use vidhub_core::error::CoreError;
use vidhub_core::ids::parse_id;
use vidhub_core::ownership::ensure_owner;
use vidhub_core::text::require_text;
use vidhub_core::types::DbId;
use vidhub_db::models::tweet::Tweet;
use vidhub_db::repositories::{TweetRepo, UserRepo};

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::response::{ApiResponse, Empty};
use crate::state::AppState;

const CONTENT_REQUIRED: &str = "Tweet content is required";
const FORBIDDEN: &str = "You are not authorized to modify this tweet";

#[derive(Debug, Deserialize, Validate)]
pub struct TweetBody {
    #[validate(length(max = 280, message = "must be at most 280 characters"))]
    pub content: Option<String>,
}

async fn load_owned(state: &AppState, raw_id: &str, caller: DbId) -> AppResult<Tweet> {
    let id = parse_id(raw_id, "tweet")?;
    let tweet = TweetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Tweet", id))?;
    ensure_owner(tweet.owner_id, caller, FORBIDDEN)?;
    Ok(tweet)
}

/// POST /api/v1/tweets
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<TweetBody>,
) -> AppResult<ApiResponse<Tweet>> {
    let content = require_text(body.content.as_deref(), CONTENT_REQUIRED)?;
    let tweet = TweetRepo::create(&state.pool, auth.user_id, &content).await?;
    Ok(ApiResponse::created(tweet, "Tweet created successfully"))
}

/// GET /api/v1/tweets/user/{user_id}
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<ApiResponse<Vec<Tweet>>> {
    let user_id = parse_id(&user_id, "user")?;
    if !UserRepo::exists(&state.pool, user_id).await? {
        return Err(CoreError::not_found("User", user_id).into());
    }

    let tweets = TweetRepo::list_by_owner(&state.pool, user_id).await?;
    Ok(ApiResponse::ok(tweets, "User tweets fetched successfully"))
}

/// PATCH /api/v1/tweets/{tweet_id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(tweet_id): Path<String>,
    ValidatedJson(body): ValidatedJson<TweetBody>,
) -> AppResult<ApiResponse<Tweet>> {
    let tweet = load_owned(&state, &tweet_id, auth.user_id).await?;
    let content = require_text(body.content.as_deref(), CONTENT_REQUIRED)?;

    let updated = TweetRepo::update_content(&state.pool, tweet.id, &content)
        .await?
        .ok_or_else(|| CoreError::not_found("Tweet", tweet.id))?;
    Ok(ApiResponse::ok(updated, "Tweet updated successfully"))
}

/// DELETE /api/v1/tweets/{tweet_id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(tweet_id): Path<String>,
) -> AppResult<ApiResponse<Empty>> {
    let tweet = load_owned(&state, &tweet_id, auth.user_id).await?;

    if !TweetRepo::delete(&state.pool, tweet.id).await? {
        return Err(CoreError::not_found("Tweet", tweet.id).into());
    }
    Ok(ApiResponse::empty("Tweet deleted successfully"))
}
