use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, warn};

use business::domain::prescription::errors::TranscriptionError;
use business::domain::prescription::model::ImageAsset;
use business::domain::prescription::services::CaptureProvider;

/// Camera output exposed as a file: the platform camera writes the still
/// image to `path` and `capture` reads it back.
pub struct FileCaptureProvider {
    path: PathBuf,
}

impl FileCaptureProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn map_io_error(kind: ErrorKind) -> TranscriptionError {
        match kind {
            // No photo was taken, or the camera storage is off limits.
            ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                TranscriptionError::CaptureUnavailable
            }
            _ => TranscriptionError::EncodingFailure,
        }
    }
}

#[async_trait]
impl CaptureProvider for FileCaptureProvider {
    async fn capture(&self) -> Result<ImageAsset, TranscriptionError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            warn!(path = %self.path.display(), "Failed to read captured image: {}", e);
            Self::map_io_error(e.kind())
        })?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "Captured image read");

        ImageAsset::jpeg(bytes)
    }
}
