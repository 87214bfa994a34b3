use std::sync::Arc;

use logger::TracingLogger;

use capture::file_capture::FileCaptureProvider;
use openai::client::OpenAIClient;
use openai::prescription_transcriber::PrescriptionTranscriberOpenAI;
use openai::unconfigured::UnconfiguredTranscriber;

use business::application::prescription::session::TranslationSession;
use business::application::prescription::transcribe::TranscribePrescriptionUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::prescription::services::TranscriptionService;
use business::domain::prescription::use_cases::transcribe::TranscribePrescriptionUseCase;

use crate::config::capture_config::CaptureConfig;
use crate::config::openai_config::OpenAIConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub prescription_api: crate::api::prescription::routes::PrescriptionApi,
    pub session_api: crate::api::session::routes::SessionApi,
}

impl DependencyContainer {
    /// A missing or unusable OpenAI configuration disables transcription
    /// only; the rest of the service still starts.
    pub fn new(openai_config: OpenAIConfig, capture_config: CaptureConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let openai_client = OpenAIClient::new(openai_config.into_settings()).inspect_err(|err| {
            tracing::error!(
                "Prescription transcription disabled, OpenAI configuration rejected: {}",
                err
            );
        });
        let transcription_configured = openai_client.is_ok();
        let transcriber: Arc<dyn TranscriptionService> = match openai_client {
            Ok(client) => Arc::new(PrescriptionTranscriberOpenAI::new(client)),
            Err(_) => Arc::new(UnconfiguredTranscriber),
        };
        tracing::info!(
            "Camera captures read from {}",
            capture_config.image_path.display()
        );
        let camera = Arc::new(FileCaptureProvider::new(capture_config.image_path));

        // Prescription use cases
        let transcribe_use_case: Arc<dyn TranscribePrescriptionUseCase> =
            Arc::new(TranscribePrescriptionUseCaseImpl {
                transcriber,
                logger: logger.clone(),
            });
        let session = Arc::new(TranslationSession::new(
            camera,
            transcribe_use_case.clone(),
            logger,
        ));

        let health_api = crate::api::health::routes::Api::new(transcription_configured);
        let prescription_api =
            crate::api::prescription::routes::PrescriptionApi::new(transcribe_use_case);
        let session_api = crate::api::session::routes::SessionApi::new(session);

        Self {
            health_api,
            prescription_api,
            session_api,
        }
    }
}
