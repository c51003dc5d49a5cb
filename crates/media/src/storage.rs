//! Object storage abstraction.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// A remote (or remote-like) home for media files.
///
/// Implementations copy the file at `path` to `key` and return a durable,
/// publicly reachable URL. They never delete `path`; cleanup of staged
/// files belongs to [`crate::MediaIngestor`].
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    async fn put_file(&self, key: &str, path: &Path, content_type: &str) -> StorageResult<String>;

    /// Short backend name for logs (`"s3"`, `"local"`).
    fn backend_name(&self) -> &'static str;
}
