use async_trait::async_trait;

use super::errors::TranscriptionError;
use super::model::{ImageAsset, TranscriptionRequest};

/// Service port for the device camera.
///
/// Produces a still image on demand. Fails with
/// [`TranscriptionError::CaptureUnavailable`] when permission is not granted
/// or the hardware is busy.
#[async_trait]
pub trait CaptureProvider: Send + Sync {
    async fn capture(&self) -> Result<ImageAsset, TranscriptionError>;
}

/// Service port for the remote multimodal model.
///
/// Sends one request and returns the text of the first answer, unmodified.
#[async_trait]
pub trait TranscriptionService: Send + Sync {
    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<String, TranscriptionError>;
}
