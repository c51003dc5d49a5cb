//! Handlers for the `/playlists` resource.
//!
//! A playlist's videos form an ordered set: adding a video that is already
//! present and removing one that is absent both succeed without change.

use axum::extract::{Path, State};
use serde::Deserialize;
use validator::Validate;
use vidhub_core::error::CoreError;
use vidhub_core::ids::{is_valid_id, parse_id, parse_valid_ids};
use vidhub_core::ownership::ensure_owner;
use vidhub_core::text::{optional_text, require_text};
use vidhub_core::types::DbId;
use vidhub_db::models::playlist::{CreatePlaylist, Playlist, PlaylistWithVideos, UpdatePlaylist};
use vidhub_db::repositories::{PlaylistRepo, VideoRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::response::{ApiResponse, Empty};
use crate::state::AppState;

/// Request body for `POST /playlists`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlaylistBody {
    #[validate(length(max = 150, message = "must be at most 150 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub description: Option<String>,
    /// Initial video ids. Entries that are not valid ids are dropped.
    #[serde(default)]
    pub videos: Vec<serde_json::Value>,
}

/// Request body for `PATCH /playlists/{playlist_id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePlaylistBody {
    #[validate(length(max = 150, message = "must be at most 150 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub description: Option<String>,
}

fn not_found(id: DbId) -> AppError {
    CoreError::not_found("Playlist", id).into()
}

/// Load a playlist and require the caller to own it. `action` fills the
/// forbidden message ("modify", "update", "delete").
async fn load_owned(
    state: &AppState,
    id: DbId,
    caller: DbId,
    action: &str,
) -> AppResult<Playlist> {
    let playlist = PlaylistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    ensure_owner(
        playlist.owner_id,
        caller,
        &format!("You are not authorized to {action} this playlist"),
    )?;
    Ok(playlist)
}

/// Parse the `{video_id}/{playlist_id}` pair used by add/remove.
fn parse_membership_ids(video_id: &str, playlist_id: &str) -> AppResult<(DbId, DbId)> {
    if !is_valid_id(video_id) || !is_valid_id(playlist_id) {
        return Err(AppError::BadRequest("Invalid playlist or video ID".into()));
    }
    Ok((
        parse_id(video_id, "video")?,
        parse_id(playlist_id, "playlist")?,
    ))
}

async fn reload(state: &AppState, id: DbId) -> AppResult<PlaylistWithVideos> {
    PlaylistRepo::find_with_videos(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// POST /api/v1/playlists
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreatePlaylistBody>,
) -> AppResult<ApiResponse<PlaylistWithVideos>> {
    const REQUIRED: &str = "Playlist name and description are required";
    let name = require_text(body.name.as_deref(), REQUIRED)?;
    let description = require_text(body.description.as_deref(), REQUIRED)?;

    let raw_ids: Vec<&str> = body.videos.iter().filter_map(|v| v.as_str()).collect();
    let input = CreatePlaylist {
        name,
        description,
        video_ids: parse_valid_ids(&raw_ids),
        owner_id: auth.user_id,
    };

    let playlist = PlaylistRepo::create(&state.pool, &input).await?;
    tracing::info!(
        playlist_id = %playlist.playlist.id,
        videos = playlist.videos.len(),
        "Playlist created"
    );
    Ok(ApiResponse::created(playlist, "Playlist created successfully"))
}

/// GET /api/v1/playlists/user/{user_id}
pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<ApiResponse<Vec<PlaylistWithVideos>>> {
    let user_id = parse_id(&user_id, "user")?;
    let playlists = PlaylistRepo::list_by_owner(&state.pool, user_id).await?;
    Ok(ApiResponse::ok(playlists, "User playlists fetched successfully"))
}

/// GET /api/v1/playlists/{playlist_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(playlist_id): Path<String>,
) -> AppResult<ApiResponse<PlaylistWithVideos>> {
    let id = parse_id(&playlist_id, "playlist")?;
    let playlist = reload(&state, id).await?;
    Ok(ApiResponse::ok(playlist, "Playlist fetched successfully"))
}

/// PATCH /api/v1/playlists/{playlist_id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(playlist_id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdatePlaylistBody>,
) -> AppResult<ApiResponse<Playlist>> {
    let id = parse_id(&playlist_id, "playlist")?;
    let playlist = load_owned(&state, id, auth.user_id, "update").await?;

    let input = UpdatePlaylist {
        name: optional_text(body.name.as_deref(), "Playlist name cannot be empty")?,
        description: optional_text(
            body.description.as_deref(),
            "Playlist description cannot be empty",
        )?,
    };
    if input.name.is_none() && input.description.is_none() {
        return Ok(ApiResponse::ok(playlist, "Playlist updated successfully"));
    }

    let updated = PlaylistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(ApiResponse::ok(updated, "Playlist updated successfully"))
}

/// DELETE /api/v1/playlists/{playlist_id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(playlist_id): Path<String>,
) -> AppResult<ApiResponse<Empty>> {
    let id = parse_id(&playlist_id, "playlist")?;
    load_owned(&state, id, auth.user_id, "delete").await?;

    if !PlaylistRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    Ok(ApiResponse::empty("Playlist deleted successfully"))
}

/// PATCH /api/v1/playlists/add/{video_id}/{playlist_id}
pub async fn add_video(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((video_id, playlist_id)): Path<(String, String)>,
) -> AppResult<ApiResponse<PlaylistWithVideos>> {
    let (video_id, playlist_id) = parse_membership_ids(&video_id, &playlist_id)?;
    load_owned(&state, playlist_id, auth.user_id, "modify").await?;

    if !VideoRepo::exists(&state.pool, video_id).await? {
        return Err(CoreError::not_found("Video", video_id).into());
    }

    let added = PlaylistRepo::add_video(&state.pool, playlist_id, video_id).await?;
    tracing::debug!(%playlist_id, %video_id, added, "Playlist add");

    let playlist = reload(&state, playlist_id).await?;
    Ok(ApiResponse::ok(playlist, "Video added to playlist"))
}

/// PATCH /api/v1/playlists/remove/{video_id}/{playlist_id}
pub async fn remove_video(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((video_id, playlist_id)): Path<(String, String)>,
) -> AppResult<ApiResponse<PlaylistWithVideos>> {
    let (video_id, playlist_id) = parse_membership_ids(&video_id, &playlist_id)?;
    load_owned(&state, playlist_id, auth.user_id, "modify").await?;

    let removed = PlaylistRepo::remove_video(&state.pool, playlist_id, video_id).await?;
    tracing::debug!(%playlist_id, %video_id, removed, "Playlist remove");

    let playlist = reload(&state, playlist_id).await?;
    Ok(ApiResponse::ok(playlist, "Video removed from playlist"))
}
