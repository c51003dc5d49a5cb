//! Media kinds accepted by the ingestion pipeline.

use serde::{Deserialize, Serialize};

/// Video file extensions accepted for publishing.
pub const SUPPORTED_VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "mkv"];

/// Image file extensions accepted for thumbnails.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    /// Object-storage key prefix for this kind.
    pub fn key_prefix(self) -> &'static str {
        match self {
            Self::Video => "videos",
            Self::Image => "images",
        }
    }

    pub fn supports_extension(self, ext: &str) -> bool {
        let ext = ext.to_ascii_lowercase();
        match self {
            Self::Video => SUPPORTED_VIDEO_EXTENSIONS.contains(&ext.as_str()),
            Self::Image => SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()),
        }
    }
}

/// MIME type for a file extension, falling back to `application/octet-stream`.
pub fn content_type_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_support_is_case_insensitive() {
        assert!(MediaKind::Video.supports_extension("MP4"));
        assert!(MediaKind::Image.supports_extension("Png"));
        assert!(!MediaKind::Image.supports_extension("mp4"));
    }

    #[test]
    fn content_types() {
        assert_eq!(content_type_for_extension("mov"), "video/quicktime");
        assert_eq!(content_type_for_extension("JPG"), "image/jpeg");
        assert_eq!(content_type_for_extension("bin"), "application/octet-stream");
    }
}
