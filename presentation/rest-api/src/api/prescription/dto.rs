use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::prescription::model::TranscriptionResult;

/// Request to translate a prescription photo.
#[derive(Debug, Clone, Object)]
pub struct TranslatePrescriptionRequest {
    /// Base64-encoded JPEG, plain or as a `data:image/jpeg;base64,` URL
    pub image_base64: String,
}

/// Transcription of a prescription photo.
#[derive(Debug, Clone, Object)]
pub struct TranslatePrescriptionResponse {
    /// Model answer, unmodified
    pub text: String,
    /// When the answer was received
    pub completed_at: DateTime<Utc>,
}

impl From<TranscriptionResult> for TranslatePrescriptionResponse {
    fn from(result: TranscriptionResult) -> Self {
        Self {
            text: result.text,
            completed_at: result.completed_at,
        }
    }
}
