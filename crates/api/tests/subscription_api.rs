//! Integration tests for the `/subscriptions` resource.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn subscribe_then_unsubscribe(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let channel = common::create_user(&app.pool, "alice").await;
    let fan = common::create_user(&app.pool, "bob").await;
    let token = app.token_for(fan);
    let uri = format!("/api/v1/subscriptions/c/{channel}");

    let (status, json) = app.post_empty(&uri, &token).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["channel_id"], channel.to_string());

    let (status, json) = app.get(&uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["id"], fan.to_string());

    let (_, json) = app
        .get(&format!("/api/v1/subscriptions/u/{fan}"), None)
        .await;
    assert_eq!(json["data"][0]["id"], channel.to_string());

    let (status, json) = app.post_empty(&uri, &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], json!({}));

    let (_, json) = app.get(&uri, None).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cannot_subscribe_to_self_or_unknown_channel(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let user = common::create_user(&app.pool, "alice").await;
    let token = app.token_for(user);

    let (status, _) = app
        .post_empty(&format!("/api/v1/subscriptions/c/{user}"), &token)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = app
        .post_empty(
            &format!("/api/v1/subscriptions/c/{}", common::unknown_id()),
            &token,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Channel not found");
}
