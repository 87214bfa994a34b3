use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::prescription::errors::TranscriptionError;
use crate::domain::prescription::model::{TranscriptionRequest, TranscriptionResult};
use crate::domain::prescription::services::TranscriptionService;
use crate::domain::prescription::use_cases::transcribe::{
    TranscribePrescriptionParams, TranscribePrescriptionUseCase,
};

pub struct TranscribePrescriptionUseCaseImpl {
    pub transcriber: Arc<dyn TranscriptionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl TranscribePrescriptionUseCase for TranscribePrescriptionUseCaseImpl {
    async fn execute(
        &self,
        params: TranscribePrescriptionParams,
    ) -> Result<TranscriptionResult, TranscriptionError> {
        let request = TranscriptionRequest::for_prescription(&params.image);
        // The image is not needed past this point.
        drop(params);

        self.logger.info(&format!(
            "Transcribing prescription image: request={}",
            request.id()
        ));

        match self.transcriber.transcribe(&request).await {
            Ok(text) => {
                self.logger.info(&format!(
                    "Prescription transcribed: request={} ({} chars)",
                    request.id(),
                    text.chars().count()
                ));
                Ok(TranscriptionResult::new(text))
            }
            Err(err) => {
                self.logger.warn(&format!(
                    "Prescription transcription failed: request={} error={}",
                    request.id(),
                    err
                ));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prescription::model::ImageAsset;
    use mockall::mock;

    mock! {
        pub Transcriber {}

        #[async_trait]
        impl TranscriptionService for Transcriber {
            async fn transcribe(
                &self,
                request: &TranscriptionRequest,
            ) -> Result<String, TranscriptionError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn jpeg() -> ImageAsset {
        ImageAsset::jpeg(vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]).unwrap()
    }

    #[tokio::test]
    async fn should_return_endpoint_text_unmodified() {
        let mut mock_transcriber = MockTranscriber::new();
        mock_transcriber
            .expect_transcribe()
            .times(1)
            .returning(|_| Ok("Paracetamol 500mg, 95% precisión".to_string()));

        let use_case = TranscribePrescriptionUseCaseImpl {
            transcriber: Arc::new(mock_transcriber),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(TranscribePrescriptionParams { image: jpeg() })
            .await;

        assert_eq!(result.unwrap().text, "Paracetamol 500mg, 95% precisión");
    }

    #[tokio::test]
    async fn should_send_encoded_image_of_the_given_asset() {
        let mut mock_transcriber = MockTranscriber::new();
        mock_transcriber
            .expect_transcribe()
            .withf(|request| {
                request.data_url() == "data:image/jpeg;base64,/9j/4AAQ"
                    && request.user_prompt() == "Clarificame lo que dice la receta medica?"
            })
            .times(1)
            .returning(|_| Ok("ok".to_string()));

        let use_case = TranscribePrescriptionUseCaseImpl {
            transcriber: Arc::new(mock_transcriber),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(TranscribePrescriptionParams { image: jpeg() })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_error_when_endpoint_fails() {
        let mut mock_transcriber = MockTranscriber::new();
        mock_transcriber
            .expect_transcribe()
            .returning(|_| Err(TranscriptionError::EndpointFailure));

        let use_case = TranscribePrescriptionUseCaseImpl {
            transcriber: Arc::new(mock_transcriber),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(TranscribePrescriptionParams { image: jpeg() })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            TranscriptionError::EndpointFailure
        ));
    }

    #[tokio::test]
    async fn should_log_failure_as_warning() {
        let mut mock_transcriber = MockTranscriber::new();
        mock_transcriber
            .expect_transcribe()
            .returning(|_| Err(TranscriptionError::NetworkFailure));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger
            .expect_warn()
            .withf(|message| message.contains("prescription.network_failed"))
            .times(1)
            .returning(|_| ());

        let use_case = TranscribePrescriptionUseCaseImpl {
            transcriber: Arc::new(mock_transcriber),
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(TranscribePrescriptionParams { image: jpeg() })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            TranscriptionError::NetworkFailure
        ));
    }
}
