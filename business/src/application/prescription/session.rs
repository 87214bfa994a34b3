use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::logger::Logger;
use crate::domain::prescription::errors::TranscriptionError;
use crate::domain::prescription::messages::LOADING_MESSAGE;
use crate::domain::prescription::model::TranscriptionResult;
use crate::domain::prescription::services::CaptureProvider;
use crate::domain::prescription::use_cases::transcribe::{
    TranscribePrescriptionParams, TranscribePrescriptionUseCase,
};
use crate::domain::prescription::value_objects::TranscriptionStatus;

#[derive(Debug)]
struct SessionState {
    status: TranscriptionStatus,
    display: Option<String>,
}

/// State behind the capture screen: one translate button, one reset button
/// and the latest displayed result.
///
/// Only one translation runs at a time. A `translate` issued while another
/// is pending is rejected with [`TranscriptionError::RequestInFlight`] without
/// touching the camera or the network. The displayed result stays as it was
/// until the pending translation finishes, then it is replaced by the new
/// text or by the error's user message.
pub struct TranslationSession {
    capture: Arc<dyn CaptureProvider>,
    transcribe_use_case: Arc<dyn TranscribePrescriptionUseCase>,
    logger: Arc<dyn Logger>,
    state: Mutex<SessionState>,
}

impl TranslationSession {
    pub fn new(
        capture: Arc<dyn CaptureProvider>,
        transcribe_use_case: Arc<dyn TranscribePrescriptionUseCase>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            capture,
            transcribe_use_case,
            logger,
            state: Mutex::new(SessionState {
                status: TranscriptionStatus::Idle,
                display: None,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn status(&self) -> TranscriptionStatus {
        self.state().status
    }

    /// Latest transcription or error message, if any.
    pub fn display(&self) -> Option<String> {
        self.state().display.clone()
    }

    /// What the screen shows right now.
    pub fn message(&self) -> Option<String> {
        let state = self.state();
        match state.status {
            TranscriptionStatus::Pending => Some(LOADING_MESSAGE.to_string()),
            _ => state.display.clone(),
        }
    }

    /// Clears the displayed result. A pending translation keeps running and
    /// will still report its outcome.
    pub fn reset(&self) {
        let mut state = self.state();
        state.display = None;
        if state.status != TranscriptionStatus::Pending {
            state.status = TranscriptionStatus::Idle;
        }
    }

    /// Captures a photo and transcribes it.
    ///
    /// Dropping the returned future before it completes puts the session
    /// back in the status it had before the call.
    pub async fn translate(&self) -> Result<TranscriptionResult, TranscriptionError> {
        let pending = {
            let mut state = self.state();
            if state.status == TranscriptionStatus::Pending {
                self.logger
                    .warn("Translate ignored: a translation is already pending");
                return Err(TranscriptionError::RequestInFlight);
            }
            let previous = std::mem::replace(&mut state.status, TranscriptionStatus::Pending);
            PendingTranslation {
                session: self,
                previous,
                settled: false,
            }
        };

        let outcome = self.capture_and_transcribe().await;

        pending.settle(match &outcome {
            Ok(result) => result.text.clone(),
            Err(err) => err.user_message().to_string(),
        });

        outcome
    }

    async fn capture_and_transcribe(&self) -> Result<TranscriptionResult, TranscriptionError> {
        let image = self.capture.capture().await.inspect_err(|err| {
            self.logger.warn(&format!("Capture failed: {}", err));
        })?;

        self.logger
            .debug(&format!("Captured image: {} bytes", image.len()));

        self.transcribe_use_case
            .execute(TranscribePrescriptionParams { image })
            .await
    }
}

/// Marks a translation as pending for as long as it is alive.
struct PendingTranslation<'a> {
    session: &'a TranslationSession,
    previous: TranscriptionStatus,
    settled: bool,
}

impl PendingTranslation<'_> {
    fn settle(mut self, display: String) {
        self.settled = true;
        let mut state = self.session.state();
        state.status = TranscriptionStatus::Done;
        state.display = Some(display);
    }
}

impl Drop for PendingTranslation<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        self.session
            .logger
            .warn("Translation cancelled before completing");
        self.session.state().status = self.previous;
    }
}
