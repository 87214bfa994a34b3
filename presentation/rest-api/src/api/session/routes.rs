use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::application::prescription::session::TranslationSession;

use crate::api::prescription::routes::TranslateResponse;
use crate::api::session::dto::SessionStateResponse;
use crate::api::tags::ApiTags;

pub struct SessionApi {
    session: Arc<TranslationSession>,
}

impl SessionApi {
    pub fn new(session: Arc<TranslationSession>) -> Self {
        Self { session }
    }
}

/// Capture screen API
///
/// Drives the on-device flow: the camera writes a photo, translate reads
/// and transcribes it, reset clears the result.
#[OpenApi]
impl SessionApi {
    /// Current screen state
    #[oai(path = "/session", method = "get", tag = "ApiTags::Session")]
    async fn state(&self) -> Json<SessionStateResponse> {
        Json(self.session.as_ref().into())
    }

    /// Translate the last camera capture
    ///
    /// Only one translation runs at a time; a call made while another is
    /// pending answers 409 without touching the camera or the model.
    #[oai(path = "/session/translate", method = "post", tag = "ApiTags::Session")]
    async fn translate(&self) -> TranslateResponse {
        match self.session.translate().await {
            Ok(result) => TranslateResponse::Ok(Json(result.into())),
            Err(err) => err.into(),
        }
    }

    /// Clear the displayed result
    #[oai(path = "/session/reset", method = "post", tag = "ApiTags::Session")]
    async fn reset(&self) -> Json<SessionStateResponse> {
        self.session.reset();
        Json(self.session.as_ref().into())
    }
}
