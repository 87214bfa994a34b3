use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::prescription::errors::TranscriptionError;
use business::domain::prescription::model::ImageAsset;
use business::domain::prescription::use_cases::transcribe::{
    TranscribePrescriptionParams, TranscribePrescriptionUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::prescription::dto::{
    TranslatePrescriptionRequest, TranslatePrescriptionResponse,
};
use crate::api::tags::ApiTags;

pub struct PrescriptionApi {
    transcribe_use_case: Arc<dyn TranscribePrescriptionUseCase>,
}

impl PrescriptionApi {
    pub fn new(transcribe_use_case: Arc<dyn TranscribePrescriptionUseCase>) -> Self {
        Self {
            transcribe_use_case,
        }
    }
}

/// Prescription API
///
/// Endpoints for reading handwritten medical prescriptions from photos.
#[OpenApi]
impl PrescriptionApi {
    /// Translate a prescription photo
    ///
    /// Sends the photo to a multimodal model that transcribes the medical
    /// order in short form, with a self-reported accuracy percentage. The
    /// model never diagnoses. The answer is returned unmodified.
    #[oai(
        path = "/prescriptions/translate",
        method = "post",
        tag = "ApiTags::Prescriptions"
    )]
    async fn translate(&self, body: Json<TranslatePrescriptionRequest>) -> TranslateResponse {
        let image = match ImageAsset::from_base64(&body.0.image_base64) {
            Ok(image) => image,
            Err(err) => return err.into(),
        };

        match self
            .transcribe_use_case
            .execute(TranscribePrescriptionParams { image })
            .await
        {
            Ok(result) => TranslateResponse::Ok(Json(result.into())),
            Err(err) => err.into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum TranslateResponse {
    #[oai(status = 200)]
    Ok(Json<TranslatePrescriptionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

impl From<TranscriptionError> for TranslateResponse {
    fn from(err: TranscriptionError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => TranslateResponse::BadRequest(json),
            409 => TranslateResponse::Conflict(json),
            422 => TranslateResponse::UnprocessableEntity(json),
            503 => TranslateResponse::ServiceUnavailable(json),
            _ => TranslateResponse::BadGateway(json),
        }
    }
}
