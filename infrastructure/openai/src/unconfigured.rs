use async_trait::async_trait;
use tracing::error;

use business::domain::prescription::errors::TranscriptionError;
use business::domain::prescription::model::TranscriptionRequest;
use business::domain::prescription::services::TranscriptionService;

/// Stands in for the OpenAI adapter when no usable API key was configured.
/// Every call fails with a configuration error and never reaches the network.
pub struct UnconfiguredTranscriber;

#[async_trait]
impl TranscriptionService for UnconfiguredTranscriber {
    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<String, TranscriptionError> {
        error!(
            request_id = %request.id(),
            "Transcription requested but OPENAI_API_KEY is not configured"
        );
        Err(TranscriptionError::Configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::prescription::model::ImageAsset;

    #[tokio::test]
    async fn should_fail_with_configuration_error() {
        let image = ImageAsset::jpeg(vec![0xFF, 0xD8]).unwrap();
        let request = TranscriptionRequest::for_prescription(&image);

        let result = UnconfiguredTranscriber.transcribe(&request).await;

        assert_eq!(result.unwrap_err(), TranscriptionError::Configuration);
    }
}
