//! Handlers for the `/videos` resource.

use axum::extract::{Multipart, Path, Query, State};
use vidhub_core::error::CoreError;
use vidhub_core::ids::parse_id;
use vidhub_core::listing::{contains_pattern, SortDirection, VideoSortField};
use vidhub_core::media::MediaKind;
use vidhub_core::ownership::ensure_owner;
use vidhub_core::pagination::Page;
use vidhub_core::text::optional_text;
use vidhub_core::types::DbId;
use vidhub_db::models::video::{CreateVideo, UpdateVideo, Video, VideoListFilter, VideoWithOwner};
use vidhub_db::repositories::VideoRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::VideoListParams;
use crate::response::{ApiResponse, Empty};
use crate::state::AppState;
use crate::upload::{ingest_error, StagedForm};

const FORBIDDEN: &str = "You are not authorized to modify this video";

/// Load a video the caller owns, or fail with 400/404/403.
async fn load_owned(state: &AppState, raw_id: &str, caller: DbId) -> AppResult<Video> {
    let id = parse_id(raw_id, "video")?;
    let video = VideoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Video", id))?;
    ensure_owner(video.owner_id, caller, FORBIDDEN)?;
    Ok(video)
}

/// GET /api/v1/videos
///
/// Paginated listing with optional title search, owner filter and sort.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<VideoListParams>,
) -> AppResult<ApiResponse<Page<VideoWithOwner>>> {
    let owner_id = params
        .user_id
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| parse_id(raw, "user"))
        .transpose()?;

    let filter = VideoListFilter {
        title_pattern: contains_pattern(params.query.as_deref()),
        owner_id,
        sort_field: VideoSortField::parse(params.sort_by.as_deref())?,
        sort_direction: SortDirection::parse(params.sort_type.as_deref()),
    };

    let page = VideoRepo::list(&state.pool, &filter, params.page_request()).await?;
    Ok(ApiResponse::ok(page, "Videos fetched successfully"))
}

/// POST /api/v1/videos
///
/// Multipart fields: `title`, `description`, `video_file`, `thumbnail`.
pub async fn publish(
    auth: AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<ApiResponse<Video>> {
    let mut form = StagedForm::read(multipart, &state.config.upload_staging_dir).await?;

    let title = form.text("title").map(str::trim).unwrap_or_default().to_string();
    let description = form
        .text("description")
        .map(str::trim)
        .unwrap_or_default()
        .to_string();
    if title.is_empty() || description.is_empty() {
        form.discard().await;
        return Err(CoreError::validation("Title and description are required").into());
    }

    let (video_file, thumbnail) = match (form.take_file("video_file"), form.take_file("thumbnail")) {
        (Some(v), Some(t)) => (v, t),
        (v, t) => {
            for staged in [v, t].into_iter().flatten() {
                staged.discard().await;
            }
            form.discard().await;
            return Err(CoreError::validation("Video and thumbnail files are required").into());
        }
    };
    form.discard().await;

    if let Err(e) = video_file
        .ensure_kind(MediaKind::Video)
        .and_then(|()| thumbnail.ensure_kind(MediaKind::Image))
    {
        video_file.discard().await;
        thumbnail.discard().await;
        return Err(e);
    }

    let video_media = match state.media.ingest(Some(&video_file.path), MediaKind::Video).await {
        Ok(media) => media,
        Err(e) => {
            thumbnail.discard().await;
            return Err(ingest_error(e, "video"));
        }
    };
    let thumbnail_media = state
        .media
        .ingest(Some(&thumbnail.path), MediaKind::Image)
        .await
        .map_err(|e| ingest_error(e, "thumbnail"))?;

    let input = CreateVideo {
        video_file: video_media.url,
        thumbnail: thumbnail_media.url,
        title,
        description,
        duration: video_media.duration_secs.unwrap_or_default(),
        owner_id: auth.user_id,
    };
    let video = VideoRepo::create(&state.pool, &input).await?;

    tracing::info!(video_id = %video.id, owner_id = %auth.user_id, "Video published");
    Ok(ApiResponse::created(video, "Video published successfully"))
}

/// GET /api/v1/videos/{video_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> AppResult<ApiResponse<VideoWithOwner>> {
    let id = parse_id(&video_id, "video")?;
    let video = VideoRepo::find_with_owner(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Video", id))?;
    Ok(ApiResponse::ok(video, "Video fetched successfully"))
}

/// PATCH /api/v1/videos/{video_id}
///
/// Multipart fields, all optional: `title`, `description`, `thumbnail`.
/// Supplying nothing leaves the video unchanged.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(video_id): Path<String>,
    multipart: Multipart,
) -> AppResult<ApiResponse<Video>> {
    let video = load_owned(&state, &video_id, auth.user_id).await?;

    let mut form = StagedForm::read(multipart, &state.config.upload_staging_dir).await?;
    let thumbnail = form.take_file("thumbnail");

    let text = optional_text(form.text("title"), "Title cannot be empty").and_then(|title| {
        optional_text(form.text("description"), "Description cannot be empty")
            .map(|description| (title, description))
    });
    form.discard().await;

    let (title, description) = match text {
        Ok(fields) => fields,
        Err(e) => {
            if let Some(staged) = thumbnail {
                staged.discard().await;
            }
            return Err(e.into());
        }
    };

    let mut input = UpdateVideo {
        title,
        description,
        thumbnail: None,
    };

    if let Some(staged) = thumbnail {
        if let Err(e) = staged.ensure_kind(MediaKind::Image) {
            staged.discard().await;
            return Err(e);
        }
        let media = state
            .media
            .ingest(Some(&staged.path), MediaKind::Image)
            .await
            .map_err(|e| ingest_error(e, "thumbnail"))?;
        input.thumbnail = Some(media.url);
    }

    if input.is_empty() {
        return Ok(ApiResponse::ok(video, "Video updated successfully"));
    }

    let updated = VideoRepo::update(&state.pool, video.id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Video", video.id))?;
    Ok(ApiResponse::ok(updated, "Video updated successfully"))
}

/// DELETE /api/v1/videos/{video_id}
///
/// Comments, likes and playlist entries pointing at the video are left in
/// place; read paths join against `videos` and skip them.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> AppResult<ApiResponse<Empty>> {
    let video = load_owned(&state, &video_id, auth.user_id).await?;

    if !VideoRepo::delete(&state.pool, video.id).await? {
        return Err(CoreError::not_found("Video", video.id).into());
    }

    tracing::info!(video_id = %video.id, "Video deleted");
    Ok(ApiResponse::empty("Video deleted successfully"))
}

/// PATCH /api/v1/videos/toggle/publish/{video_id}
pub async fn toggle_publish(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> AppResult<ApiResponse<Video>> {
    let video = load_owned(&state, &video_id, auth.user_id).await?;

    let video = VideoRepo::toggle_publish(&state.pool, video.id)
        .await?
        .ok_or_else(|| CoreError::not_found("Video", video.id))?;

    let state_word = if video.is_published {
        "published"
    } else {
        "unpublished"
    };
    Ok(ApiResponse::ok(video, format!("Video is now {state_word}")))
}
