use async_trait::async_trait;
use tracing::{debug, warn};

use business::domain::prescription::errors::TranscriptionError;
use business::domain::prescription::model::TranscriptionRequest;
use business::domain::prescription::services::TranscriptionService;

use crate::chat_completion::{ChatCompletionRequest, ChatCompletionResponse};
use crate::client::OpenAIClient;

/// Sends a prescription photo to the chat completions API and returns the
/// model's answer as-is. One POST per call, no retry.
pub struct PrescriptionTranscriberOpenAI {
    client: OpenAIClient,
}

impl PrescriptionTranscriberOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TranscriptionService for PrescriptionTranscriberOpenAI {
    async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<String, TranscriptionError> {
        let body = ChatCompletionRequest::for_transcription(self.client.model(), request);

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(
                    request_id = %request.id(),
                    timeout = e.is_timeout(),
                    "OpenAI request failed: {}",
                    e
                );
                TranscriptionError::NetworkFailure
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                request_id = %request.id(),
                status = status.as_u16(),
                "OpenAI returned a non-success status"
            );
            return Err(TranscriptionError::EndpointFailure);
        }

        let raw = response.text().await.map_err(|e| {
            warn!(request_id = %request.id(), "OpenAI response body unreadable: {}", e);
            TranscriptionError::NetworkFailure
        })?;

        let text = ChatCompletionResponse::parse(&raw)
            .and_then(ChatCompletionResponse::into_text)
            .inspect_err(|_| {
                warn!(
                    request_id = %request.id(),
                    "OpenAI response has no choices[0].message.content"
                );
            })?;

        debug!(request_id = %request.id(), chars = text.chars().count(), "OpenAI answered");

        Ok(text)
    }
}
