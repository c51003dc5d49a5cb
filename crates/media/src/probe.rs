//! Duration probing for staged video files.

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

/// Error type for probing operations.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("ffprobe binary not found: {0}")]
    NotFound(std::io::Error),

    #[error("ffprobe execution failed (exit code {exit_code:?}): {stderr}")]
    ExecutionFailed {
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("failed to parse ffprobe output: {0}")]
    ParseError(String),

    #[error("media file not found: {0}")]
    FileNotFound(String),
}

/// Derives metadata from a local media file before it is uploaded.
#[async_trait]
pub trait MediaProbe: Send + Sync {
    /// Duration of the media in (fractional) seconds.
    async fn duration_secs(&self, path: &Path) -> Result<f64, ProbeError>;
}

/// Format-level section of `ffprobe -print_format json -show_format`.
#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    format: FfprobeFormat,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    duration: Option<String>,
}

/// [`MediaProbe`] backed by the `ffprobe` binary on `PATH`.
#[derive(Debug, Clone, Default)]
pub struct FfprobeProbe;

#[async_trait]
impl MediaProbe for FfprobeProbe {
    async fn duration_secs(&self, path: &Path) -> Result<f64, ProbeError> {
        if !path.exists() {
            return Err(ProbeError::FileNotFound(path.to_string_lossy().to_string()));
        }

        let output = tokio::process::Command::new("ffprobe")
            .args(["-v", "quiet", "-print_format", "json", "-show_format"])
            .arg(path)
            .output()
            .await
            .map_err(ProbeError::NotFound)?;

        if !output.status.success() {
            return Err(ProbeError::ExecutionFailed {
                exit_code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        parse_duration(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Extract `format.duration` from ffprobe JSON output.
fn parse_duration(stdout: &str) -> Result<f64, ProbeError> {
    let parsed: FfprobeOutput = serde_json::from_str(stdout)
        .map_err(|e| ProbeError::ParseError(format!("{e}: {stdout}")))?;

    parsed
        .format
        .duration
        .as_deref()
        .and_then(|d| d.parse::<f64>().ok())
        .filter(|d| d.is_finite() && *d >= 0.0)
        .ok_or_else(|| ProbeError::ParseError("missing or invalid format.duration".into()))
}

/// Floor a probed duration to whole seconds, saturating at `i32::MAX`.
pub fn whole_seconds(secs: f64) -> i32 {
    secs.floor().clamp(0.0, i32::MAX as f64) as i32
}
