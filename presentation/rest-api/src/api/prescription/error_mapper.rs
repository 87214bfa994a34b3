use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::prescription::errors::TranscriptionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for TranscriptionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            TranscriptionError::EncodingFailure => (StatusCode::BAD_REQUEST, "ValidationError"),
            TranscriptionError::CaptureUnavailable => {
                (StatusCode::UNPROCESSABLE_ENTITY, "CaptureError")
            }
            TranscriptionError::NetworkFailure | TranscriptionError::EndpointFailure => {
                (StatusCode::BAD_GATEWAY, "TranscriptionError")
            }
            TranscriptionError::Configuration => {
                (StatusCode::SERVICE_UNAVAILABLE, "ConfigurationError")
            }
            TranscriptionError::RequestInFlight => (StatusCode::CONFLICT, "ConflictError"),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
                display_message: self.user_message().to_string(),
            }),
        )
    }
}
