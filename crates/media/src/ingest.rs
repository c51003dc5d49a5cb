//! Staged-file ingestion.
//!
//! [`MediaIngestor::ingest`] uploads one staged file and then removes it,
//! whatever the outcome. Callers get a typed result that separates "no file
//! was provided" from "the upload failed".

use std::path::Path;
use std::sync::Arc;

use uuid::Uuid;
use vidhub_core::media::{content_type_for_extension, MediaKind};

use crate::probe::{whole_seconds, MediaProbe, ProbeError};
use crate::storage::{ObjectStorage, StorageError};

/// A file that now lives in object storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestedMedia {
    pub url: String,
    pub key: String,
    pub kind: MediaKind,
    /// Whole seconds, present for videos only.
    pub duration_secs: Option<i32>,
}

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("no file was provided")]
    MissingFile,

    #[error("failed to read media metadata: {0}")]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    Upload(#[from] StorageError),
}

/// Uploads staged files to object storage.
#[derive(Clone)]
pub struct MediaIngestor {
    storage: Arc<dyn ObjectStorage>,
    probe: Arc<dyn MediaProbe>,
}

impl MediaIngestor {
    pub fn new(storage: Arc<dyn ObjectStorage>, probe: Arc<dyn MediaProbe>) -> Self {
        Self { storage, probe }
    }

    /// Name of the storage backend, for logs and health output.
    pub fn backend_name(&self) -> &'static str {
        self.storage.backend_name()
    }

    /// Upload `staged` as `kind`, then delete the staged file.
    ///
    /// The staged file is removed exactly once after the attempt, on
    /// success and on failure. A failed removal is logged and does not
    /// change the returned outcome.
    pub async fn ingest(
        &self,
        staged: Option<&Path>,
        kind: MediaKind,
    ) -> Result<IngestedMedia, IngestError> {
        let Some(path) = staged else {
            return Err(IngestError::MissingFile);
        };

        let outcome = self.upload(path, kind).await;
        remove_staged(path).await;

        match outcome {
            Ok(media) => {
                tracing::info!(
                    backend = self.storage.backend_name(),
                    key = %media.key,
                    ?kind,
                    "Media ingested"
                );
                Ok(media)
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    backend = self.storage.backend_name(),
                    path = %path.display(),
                    ?kind,
                    "Media ingestion failed"
                );
                Err(err)
            }
        }
    }

    async fn upload(&self, path: &Path, kind: MediaKind) -> Result<IngestedMedia, IngestError> {
        let duration_secs = match kind {
            MediaKind::Video => Some(whole_seconds(self.probe.duration_secs(path).await?)),
            MediaKind::Image => None,
        };

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| "bin".to_string());
        let key = format!("{}/{}.{}", kind.key_prefix(), Uuid::new_v4(), ext);

        let url = self
            .storage
            .put_file(&key, path, content_type_for_extension(&ext))
            .await?;

        Ok(IngestedMedia {
            url,
            key,
            kind,
            duration_secs,
        })
    }
}

async fn remove_staged(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => tracing::debug!(path = %path.display(), "Removed staged file"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Staged file was already removed");
        }
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "Failed to remove staged file");
        }
    }
}
