//! Multipart staging.
//!
//! Uploaded files are streamed to the staging directory before anything
//! else happens; handlers then hand them to the
//! [`MediaIngestor`](vidhub_media::MediaIngestor), which deletes them. Files
//! a handler never ingests must be released with [`StagedForm::discard`] or
//! [`StagedFile::discard`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::http::StatusCode;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;
use vidhub_core::media::MediaKind;
use vidhub_media::IngestError;

use crate::error::{AppError, AppResult};

/// A file written to the staging directory.
#[derive(Debug)]
pub struct StagedFile {
    pub path: PathBuf,
    /// File name as sent by the client.
    pub original_name: String,
}

impl StagedFile {
    /// Lowercased extension of the client-supplied name.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
    }

    /// Reject files whose extension is not accepted for `kind`.
    pub fn ensure_kind(&self, kind: MediaKind) -> AppResult<()> {
        let ext = self.extension().unwrap_or_default();
        if kind.supports_extension(&ext) {
            return Ok(());
        }
        let label = match kind {
            MediaKind::Video => "video",
            MediaKind::Image => "image",
        };
        Err(AppError::BadRequest(format!(
            "Unsupported {label} format '.{ext}'"
        )))
    }

    /// Remove the staged file without ingesting it.
    pub async fn discard(self) {
        if let Err(e) = tokio::fs::remove_file(&self.path).await {
            tracing::warn!(error = %e, path = %self.path.display(), "Failed to discard staged file");
        }
    }
}

/// Text fields and staged files of one multipart request.
#[derive(Debug, Default)]
pub struct StagedForm {
    fields: HashMap<String, String>,
    files: HashMap<String, StagedFile>,
}

impl StagedForm {
    /// Read every field of `multipart`, staging file parts under `staging_dir`.
    ///
    /// File parts with an empty file name (a form submitted without choosing
    /// a file) are treated as absent. On error, anything already staged is
    /// removed.
    pub async fn read(mut multipart: Multipart, staging_dir: &Path) -> AppResult<Self> {
        let mut form = Self::default();
        match form.read_fields(&mut multipart, staging_dir).await {
            Ok(()) => Ok(form),
            Err(e) => {
                form.discard().await;
                Err(e)
            }
        }
    }

    async fn read_fields(&mut self, multipart: &mut Multipart, staging_dir: &Path) -> AppResult<()> {
        while let Some(mut field) = multipart.next_field().await.map_err(invalid_multipart)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(original_name) if !original_name.is_empty() => {
                    let staged = stage_field(&mut field, original_name, staging_dir).await?;
                    if let Some(replaced) = self.files.insert(name, staged) {
                        replaced.discard().await;
                    }
                }
                Some(_) => {}
                None => {
                    let text = field.text().await.map_err(invalid_multipart)?;
                    self.fields.insert(name, text);
                }
            }
        }
        Ok(())
    }

    /// Raw value of a text field.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Take ownership of a staged file, leaving the rest of the form intact.
    pub fn take_file(&mut self, name: &str) -> Option<StagedFile> {
        self.files.remove(name)
    }

    /// Remove every staged file still held by the form.
    pub async fn discard(self) {
        for (_, file) in self.files {
            file.discard().await;
        }
    }
}

async fn stage_field(
    field: &mut Field<'_>,
    original_name: String,
    staging_dir: &Path,
) -> AppResult<StagedFile> {
    tokio::fs::create_dir_all(staging_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create staging dir: {e}")))?;

    let ext: String = Path::new(&original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            e.chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
                .to_ascii_lowercase()
        })
        .unwrap_or_default();
    let file_name = if ext.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        format!("{}.{ext}", Uuid::new_v4())
    };

    let staged = StagedFile {
        path: staging_dir.join(file_name),
        original_name,
    };

    if let Err(e) = write_chunks(field, &staged.path).await {
        staged.discard().await;
        return Err(e);
    }

    tracing::debug!(path = %staged.path.display(), original = %staged.original_name, "Staged upload");
    Ok(staged)
}

async fn write_chunks(field: &mut Field<'_>, path: &Path) -> AppResult<()> {
    let io_err = |e: std::io::Error| AppError::InternalError(format!("Failed to stage upload: {e}"));

    let mut file = tokio::fs::File::create(path).await.map_err(io_err)?;
    while let Some(chunk) = field.chunk().await.map_err(invalid_multipart)? {
        file.write_all(&chunk).await.map_err(io_err)?;
    }
    file.flush().await.map_err(io_err)?;
    Ok(())
}

fn invalid_multipart(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge(format!(
            "Upload exceeds the size limit: {}",
            err.body_text()
        ));
    }
    AppError::BadRequest(format!("Invalid multipart body: {}", err.body_text()))
}

/// Map an ingestion failure to an HTTP error.
///
/// A missing file is the caller's fault; anything else is a 500 whose cause
/// is logged.
pub fn ingest_error(err: IngestError, what: &str) -> AppError {
    match err {
        IngestError::MissingFile => AppError::BadRequest(format!("{what} file is required")),
        other => AppError::InternalError(format!("Failed to upload {what}: {other}")),
    }
}
