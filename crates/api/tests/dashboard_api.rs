//! Integration tests for the `/dashboard` resource.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn stats_start_at_zero_and_track_videos_and_likes(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let creator = common::create_user(&app.pool, "alice").await;
    let fan = common::create_user(&app.pool, "bob").await;
    let token = app.token_for(creator);

    let (status, json) = app.get("/api/v1/dashboard/stats", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["data"],
        serde_json::json!({ "total_videos": 0, "total_subscribers": 0, "total_likes": 0 })
    );

    let video_id = app.publish_video(&token, "Launch").await;
    app.post_empty(&format!("/api/v1/likes/toggle/v/{video_id}"), &app.token_for(fan))
        .await;

    let (_, json) = app.get("/api/v1/dashboard/stats", Some(&token)).await;
    assert_eq!(json["data"]["total_videos"], 1);
    assert_eq!(json["data"]["total_likes"], 1);
    assert_eq!(json["data"]["total_subscribers"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn subscribers_are_counted(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let creator = common::create_user(&app.pool, "alice").await;
    let fan = common::create_user(&app.pool, "bob").await;

    app.post_empty(
        &format!("/api/v1/subscriptions/c/{creator}"),
        &app.token_for(fan),
    )
    .await;

    let (_, json) = app
        .get("/api/v1/dashboard/stats", Some(&app.token_for(creator)))
        .await;
    assert_eq!(json["data"]["total_subscribers"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn channel_videos_lists_only_own_videos(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let creator = common::create_user(&app.pool, "alice").await;
    let other = common::create_user(&app.pool, "bob").await;
    common::insert_video(&app.pool, creator, "Mine").await;
    common::insert_video(&app.pool, other, "Theirs").await;

    let (status, json) = app
        .get("/api/v1/dashboard/videos", Some(&app.token_for(creator)))
        .await;

    assert_eq!(status, StatusCode::OK);
    let videos = json["data"].as_array().unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0]["title"], "Mine");
    assert!(videos[0].get("video_file").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn stats_require_auth(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let (status, _) = app.get("/api/v1/dashboard/stats", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
