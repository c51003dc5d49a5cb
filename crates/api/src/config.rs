use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

/// Default request body cap for uploads: 500 MiB.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 500 * 1024 * 1024;

/// Process-wide settings, read once in `main` and shared through
/// `AppState` behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Comma-separated in `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    /// Directory multipart uploads are staged in before ingestion.
    pub upload_staging_dir: PathBuf,
    /// Maximum accepted request body size in bytes.
    pub max_upload_bytes: usize,
    pub jwt: JwtConfig,
    /// Object storage backend for uploaded media.
    pub storage: StorageConfig,
}

/// Where ingested media ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// Files are copied under `path` and served from `public_url`.
    Local { path: PathBuf, public_url: String },
    /// Files are uploaded to an S3-compatible bucket.
    S3 {
        bucket: String,
        region: String,
        endpoint_url: Option<String>,
    },
}

impl ServerConfig {
    /// Environment variables and their defaults:
    ///
    /// | Env Var                | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `8000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `UPLOAD_STAGING_DIR`   | `./public/temp`         |
    /// | `MAX_UPLOAD_BYTES`     | `524288000`             |
    ///
    /// See [`JwtConfig::from_env`] and [`StorageConfig::from_env`] for the
    /// remaining variables.
    pub fn from_env() -> Self {
        let cors_origins = env_or("CORS_ORIGINS", "http://localhost:5173".to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0".to_string()),
            port: env_or("PORT", 8000),
            cors_origins,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            upload_staging_dir: env_or("UPLOAD_STAGING_DIR", PathBuf::from("./public/temp")),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
            jwt: JwtConfig::from_env(),
            storage: StorageConfig::from_env(),
        }
    }
}

/// Parse `key` from the environment, falling back to `default` when unset.
/// A value that does not parse panics with the variable name.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key}='{raw}' is invalid: {e}")),
        Err(_) => default,
    }
}

impl StorageConfig {
    /// Load the storage backend selection.
    ///
    /// | Env Var              | Default                        |
    /// |----------------------|--------------------------------|
    /// | `STORAGE_BACKEND`    | `local` (`local` or `s3`)      |
    /// | `STORAGE_LOCAL_PATH` | `./public/media`               |
    /// | `STORAGE_PUBLIC_URL` | `http://localhost:8000/media`  |
    /// | `S3_BUCKET`          | required when backend is `s3`  |
    /// | `S3_REGION`          | required when backend is `s3`  |
    /// | `S3_ENDPOINT_URL`    | AWS                            |
    ///
    /// # Panics
    ///
    /// Panics on an unknown backend, or a missing `S3_BUCKET` / `S3_REGION`.
    pub fn from_env() -> Self {
        let backend: String = env_or("STORAGE_BACKEND", "local".to_string());

        match backend.to_ascii_lowercase().as_str() {
            "local" => Self::Local {
                path: env_or("STORAGE_LOCAL_PATH", PathBuf::from("./public/media")),
                public_url: env_or(
                    "STORAGE_PUBLIC_URL",
                    "http://localhost:8000/media".to_string(),
                ),
            },
            "s3" => Self::S3 {
                bucket: std::env::var("S3_BUCKET")
                    .expect("S3_BUCKET must be set when STORAGE_BACKEND=s3"),
                region: std::env::var("S3_REGION")
                    .expect("S3_REGION must be set when STORAGE_BACKEND=s3"),
                endpoint_url: std::env::var("S3_ENDPOINT_URL").ok().filter(|s| !s.is_empty()),
            },
            other => panic!("Unknown STORAGE_BACKEND '{other}'. Expected 'local' or 's3'"),
        }
    }
}
