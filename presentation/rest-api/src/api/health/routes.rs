use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Whether an OpenAI credential was configured at startup
    pub transcription_configured: bool,
}

/// Health API for monitoring and infrastructure checks
pub struct Api {
    transcription_configured: bool,
}

impl Api {
    pub fn new(transcription_configured: bool) -> Self {
        Self {
            transcription_configured,
        }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service. The service stays healthy
    /// without an OpenAI credential; `transcription_configured` tells whether
    /// the translate endpoint can work.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            transcription_configured: self.transcription_configured,
        })
    }
}
