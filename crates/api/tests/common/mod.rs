#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

use vidhub_api::auth::jwt::{generate_access_token, JwtConfig};
use vidhub_api::config::{ServerConfig, StorageConfig};
use vidhub_api::router::build_app_router;
use vidhub_api::state::AppState;
use vidhub_core::types::DbId;
use vidhub_db::models::user::CreateUser;
use vidhub_db::repositories::UserRepo;
use vidhub_media::{LocalStorage, MediaIngestor, MediaProbe, ProbeError};

/// Every probed video reports this duration.
pub const PROBED_DURATION: f64 = 42.7;

const BOUNDARY: &str = "vidhub-test-boundary";

/// Probe stub so tests do not need ffprobe installed.
pub struct FixedProbe;

#[async_trait]
impl MediaProbe for FixedProbe {
    async fn duration_secs(&self, _path: &Path) -> Result<f64, ProbeError> {
        Ok(PROBED_DURATION)
    }
}

/// Build a test `ServerConfig` rooted in `dir`.
pub fn test_config(dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_staging_dir: dir.join("staging"),
        max_upload_bytes: 10 * 1024 * 1024,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
        storage: StorageConfig::Local {
            path: dir.join("media"),
            public_url: "http://media.test".to_string(),
        },
    }
}

/// Application under test plus the temp directory backing its storage.
pub struct TestApp {
    pub router: Router,
    pub config: ServerConfig,
    pub pool: PgPool,
    _dir: TempDir,
}

impl TestApp {
    pub fn staging_dir(&self) -> PathBuf {
        self.config.upload_staging_dir.clone()
    }

    /// Files currently left in the staging directory.
    pub fn staged_files(&self) -> Vec<PathBuf> {
        std::fs::read_dir(self.staging_dir())
            .map(|entries| entries.filter_map(|e| e.ok()).map(|e| e.path()).collect())
            .unwrap_or_default()
    }

    pub fn token_for(&self, user_id: DbId) -> String {
        generate_access_token(user_id, &self.config.jwt).unwrap()
    }

    /// Send a request and return the status plus parsed JSON body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(request(Method::GET, uri, token).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(
            request(Method::DELETE, uri, Some(token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_empty(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(request(Method::POST, uri, Some(token)).body(Body::empty()).unwrap())
            .await
    }

    pub async fn patch_empty(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(
            request(Method::PATCH, uri, Some(token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.json(Method::POST, uri, token, body).await
    }

    pub async fn patch_json(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.json(Method::PATCH, uri, token, body).await
    }

    async fn json(&self, method: Method, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            request(method, uri, Some(token))
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn multipart(
        &self,
        method: Method,
        uri: &str,
        token: &str,
        parts: &[Part<'_>],
    ) -> (StatusCode, Value) {
        self.send(
            request(method, uri, Some(token))
                .header(
                    "content-type",
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(multipart_body(parts)))
                .unwrap(),
        )
        .await
    }

    /// Publish a video with placeholder media; returns its id.
    pub async fn publish_video(&self, token: &str, title: &str) -> String {
        let (status, json) = self
            .multipart(
                Method::POST,
                "/api/v1/videos",
                token,
                &[
                    Part::Text("title", title),
                    Part::Text("description", "a test video"),
                    Part::File("video_file", "clip.mp4", b"not really a video"),
                    Part::File("thumbnail", "thumb.png", b"not really a png"),
                ],
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "publish failed: {json}");
        json["data"]["id"].as_str().unwrap().to_string()
    }
}

/// One multipart form part.
pub enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, file_name, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn request(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header("authorization", format!("Bearer {token}")),
        None => builder,
    }
}

/// Build the full application over `pool`, with local storage in a temp dir.
pub async fn build_test_app(pool: PgPool) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let StorageConfig::Local { path, public_url } = &config.storage else {
        unreachable!("tests always use local storage");
    };
    let storage = LocalStorage::new(path.clone(), public_url.clone())
        .await
        .unwrap();
    let media = MediaIngestor::new(Arc::new(storage), Arc::new(FixedProbe));

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        media: Arc::new(media),
    };

    TestApp {
        router: build_app_router(state, &config),
        config,
        pool,
        _dir: dir,
    }
}

/// Insert a user with a unique username and return its id.
pub async fn create_user(pool: &PgPool, name: &str) -> DbId {
    let suffix = Uuid::new_v4().simple().to_string();
    let input = CreateUser {
        username: format!("{name}_{}", &suffix[..8]),
        email: format!("{name}_{}@example.com", &suffix[..8]),
        full_name: name.to_string(),
        avatar: None,
    };
    UserRepo::create(pool, &input).await.unwrap().id
}

/// A well-formed id that names nothing.
pub fn unknown_id() -> String {
    Uuid::new_v4().to_string()
}

/// Insert a video row directly, bypassing upload.
pub async fn insert_video(pool: &PgPool, owner_id: DbId, title: &str) -> DbId {
    let input = vidhub_db::models::video::CreateVideo {
        video_file: format!("http://media.test/videos/{title}.mp4"),
        thumbnail: format!("http://media.test/images/{title}.png"),
        title: title.to_string(),
        description: format!("{title} description"),
        duration: 60,
        owner_id,
    };
    vidhub_db::repositories::VideoRepo::create(pool, &input)
        .await
        .unwrap()
        .id
}
