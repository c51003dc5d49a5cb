//! Integration tests for the `/videos` resource.

mod common;

use axum::http::{Method, StatusCode};
use common::Part;
use sqlx::PgPool;

async fn video_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM videos")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn publish_uploads_media_and_clears_staging(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let owner = common::create_user(&app.pool, "alice").await;
    let token = app.token_for(owner);

    let (status, json) = app
        .multipart(
            Method::POST,
            "/api/v1/videos",
            &token,
            &[
                Part::Text("title", "  First upload  "),
                Part::Text("description", "hello"),
                Part::File("video_file", "clip.mp4", b"video bytes"),
                Part::File("thumbnail", "thumb.PNG", b"image bytes"),
            ],
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "{json}");
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Video published successfully");
    let data = &json["data"];
    assert_eq!(data["title"], "First upload");
    assert_eq!(data["duration"], 42);
    assert_eq!(data["is_published"], true);
    assert_eq!(data["owner_id"], owner.to_string());
    assert!(data["video_file"].as_str().unwrap().starts_with("http://media.test/videos/"));
    assert!(data["thumbnail"].as_str().unwrap().starts_with("http://media.test/images/"));
    assert!(data["thumbnail"].as_str().unwrap().ends_with(".png"));

    assert!(app.staged_files().is_empty(), "staging dir must be empty");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn publish_without_title_is_rejected_and_nothing_persists(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let owner = common::create_user(&app.pool, "alice").await;
    let token = app.token_for(owner);

    let (status, json) = app
        .multipart(
            Method::POST,
            "/api/v1/videos",
            &token,
            &[
                Part::Text("title", "   "),
                Part::Text("description", "hello"),
                Part::File("video_file", "clip.mp4", b"video bytes"),
                Part::File("thumbnail", "thumb.png", b"image bytes"),
            ],
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Title and description are required");
    assert_eq!(video_count(&app.pool).await, 0);
    assert!(app.staged_files().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn publish_without_thumbnail_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let owner = common::create_user(&app.pool, "alice").await;
    let token = app.token_for(owner);

    let (status, json) = app
        .multipart(
            Method::POST,
            "/api/v1/videos",
            &token,
            &[
                Part::Text("title", "Clip"),
                Part::Text("description", "hello"),
                Part::File("video_file", "clip.mp4", b"video bytes"),
            ],
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Video and thumbnail files are required");
    assert_eq!(video_count(&app.pool).await, 0);
    assert!(app.staged_files().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn publish_rejects_unsupported_video_format(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let owner = common::create_user(&app.pool, "alice").await;
    let token = app.token_for(owner);

    let (status, json) = app
        .multipart(
            Method::POST,
            "/api/v1/videos",
            &token,
            &[
                Part::Text("title", "Clip"),
                Part::Text("description", "hello"),
                Part::File("video_file", "notes.txt", b"text"),
                Part::File("thumbnail", "thumb.png", b"image bytes"),
            ],
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Unsupported video format '.txt'");
    assert!(app.staged_files().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn oversized_upload_is_413_and_nothing_is_staged(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let owner = common::create_user(&app.pool, "alice").await;
    let oversized = vec![0u8; app.config.max_upload_bytes + 1024];

    let (status, json) = app
        .multipart(
            Method::POST,
            "/api/v1/videos",
            &app.token_for(owner),
            &[
                Part::Text("title", "Clip"),
                Part::Text("description", "hello"),
                Part::File("video_file", "clip.mp4", &oversized),
                Part::File("thumbnail", "thumb.png", b"image bytes"),
            ],
        )
        .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["code"], "PAYLOAD_TOO_LARGE");
    assert!(app.staged_files().is_empty());
    assert_eq!(video_count(&app.pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_by_id_includes_owner_profile(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let owner = common::create_user(&app.pool, "alice").await;
    let video_id = common::insert_video(&app.pool, owner, "Intro").await;

    let (status, json) = app.get(&format!("/api/v1/videos/{video_id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["title"], "Intro");
    assert!(json["data"]["owner"]["username"]
        .as_str()
        .unwrap()
        .starts_with("alice_"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_by_id_rejects_bad_and_unknown_ids(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let (status, json) = app.get("/api/v1/videos/not-an-id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid video ID");

    let (status, json) = app
        .get(&format!("/api/v1/videos/{}", common::unknown_id()), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Video not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn second_page_of_fifteen_holds_five(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let owner = common::create_user(&app.pool, "alice").await;
    for i in 0..15 {
        common::insert_video(&app.pool, owner, &format!("video-{i:02}")).await;
    }

    let (status, json) = app.get("/api/v1/videos?page=2&limit=10", None).await;

    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["items"].as_array().unwrap().len(), 5);
    assert_eq!(data["total_items"], 15);
    assert_eq!(data["page"], 2);
    assert_eq!(data["total_pages"], 2);
    assert_eq!(data["has_next_page"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn maximum_limit_returns_single_page(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let owner = common::create_user(&app.pool, "alice").await;
    common::insert_video(&app.pool, owner, "one").await;
    common::insert_video(&app.pool, owner, "two").await;

    let (status, json) = app
        .get("/api/v1/videos?limit=9223372036854775807", None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["total_pages"], 1);
    assert_eq!(json["data"]["has_next_page"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_by_title_and_owner_and_sorts(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let alice = common::create_user(&app.pool, "alice").await;
    let bob = common::create_user(&app.pool, "bob").await;
    common::insert_video(&app.pool, alice, "Rust basics").await;
    common::insert_video(&app.pool, alice, "Advanced RUST").await;
    common::insert_video(&app.pool, alice, "Cooking").await;
    common::insert_video(&app.pool, bob, "Rust for bob").await;

    let (status, json) = app
        .get(
            &format!("/api/v1/videos?query=rust&user_id={alice}&sort_by=title&sort_type=asc"),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = json["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Advanced RUST", "Rust basics"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_rejects_bad_user_id_and_sort_field(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let (status, json) = app.get("/api/v1/videos?user_id=xyz", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid user ID");

    let (status, _) = app.get("/api/v1/videos?sort_by=owner_id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_by_non_owner_is_forbidden_and_leaves_video_unchanged(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let owner = common::create_user(&app.pool, "alice").await;
    let intruder = common::create_user(&app.pool, "mallory").await;
    let video_id = common::insert_video(&app.pool, owner, "Original").await;

    let (status, json) = app
        .multipart(
            Method::PATCH,
            &format!("/api/v1/videos/{video_id}"),
            &app.token_for(intruder),
            &[Part::Text("title", "Hijacked")],
        )
        .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "You are not authorized to modify this video");

    let (_, json) = app.get(&format!("/api/v1/videos/{video_id}"), None).await;
    assert_eq!(json["data"]["title"], "Original");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn owner_updates_title_and_thumbnail(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let owner = common::create_user(&app.pool, "alice").await;
    let video_id = common::insert_video(&app.pool, owner, "Original").await;

    let (status, json) = app
        .multipart(
            Method::PATCH,
            &format!("/api/v1/videos/{video_id}"),
            &app.token_for(owner),
            &[
                Part::Text("title", "Renamed"),
                Part::File("thumbnail", "new.jpg", b"jpeg bytes"),
            ],
        )
        .await;

    assert_eq!(status, StatusCode::OK, "{json}");
    assert_eq!(json["data"]["title"], "Renamed");
    assert_eq!(json["data"]["description"], "Original description");
    assert!(json["data"]["thumbnail"]
        .as_str()
        .unwrap()
        .starts_with("http://media.test/images/"));
    assert!(app.staged_files().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_with_blank_title_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let owner = common::create_user(&app.pool, "alice").await;
    let video_id = common::insert_video(&app.pool, owner, "Original").await;

    let (status, _) = app
        .multipart(
            Method::PATCH,
            &format!("/api/v1/videos/{video_id}"),
            &app.token_for(owner),
            &[Part::Text("title", "  ")],
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn toggle_publish_flips_flag(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let owner = common::create_user(&app.pool, "alice").await;
    let token = app.token_for(owner);
    let video_id = common::insert_video(&app.pool, owner, "Clip").await;
    let uri = format!("/api/v1/videos/toggle/publish/{video_id}");

    let (status, json) = app.patch_empty(&uri, &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Video is now unpublished");
    assert_eq!(json["data"]["is_published"], false);

    let (_, json) = app.patch_empty(&uri, &token).await;
    assert_eq!(json["message"], "Video is now published");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn owner_deletes_video(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let owner = common::create_user(&app.pool, "alice").await;
    let intruder = common::create_user(&app.pool, "mallory").await;
    let video_id = common::insert_video(&app.pool, owner, "Clip").await;
    let uri = format!("/api/v1/videos/{video_id}");

    let (status, _) = app.delete(&uri, &app.token_for(intruder)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, json) = app.delete(&uri, &app.token_for(owner)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], serde_json::json!({}));
    assert_eq!(json["message"], "Video deleted successfully");

    let (status, _) = app.get(&uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn mutations_require_a_token(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let owner = common::create_user(&app.pool, "alice").await;
    let video_id = common::insert_video(&app.pool, owner, "Clip").await;

    let (status, json) = app
        .delete(&format!("/api/v1/videos/{video_id}"), "garbage-token")
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Invalid or expired token");
}
