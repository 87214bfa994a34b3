use super::messages::{FAILURE_MESSAGE, LOADING_MESSAGE, PERMISSION_MESSAGE};

/// Every failure of the capture-and-transcribe flow.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscriptionError {
    #[error("prescription.capture_unavailable")]
    CaptureUnavailable,
    #[error("prescription.encoding_failed")]
    EncodingFailure,
    #[error("prescription.network_failed")]
    NetworkFailure,
    #[error("prescription.endpoint_failed")]
    EndpointFailure,
    #[error("prescription.not_configured")]
    Configuration,
    #[error("prescription.request_in_flight")]
    RequestInFlight,
}

impl TranscriptionError {
    /// Short text to display instead of a transcription.
    pub fn user_message(&self) -> &'static str {
        match self {
            TranscriptionError::CaptureUnavailable => PERMISSION_MESSAGE,
            TranscriptionError::RequestInFlight => LOADING_MESSAGE,
            TranscriptionError::EncodingFailure
            | TranscriptionError::NetworkFailure
            | TranscriptionError::EndpointFailure
            | TranscriptionError::Configuration => FAILURE_MESSAGE,
        }
    }
}
