use poem_openapi::Object;

use business::application::prescription::session::TranslationSession;

/// What the capture screen shows.
#[derive(Debug, Clone, Object)]
pub struct SessionStateResponse {
    /// `idle`, `pending` or `done`
    pub status: String,
    /// Loading text while pending, otherwise the last result or error message
    pub message: Option<String>,
}

impl From<&TranslationSession> for SessionStateResponse {
    fn from(session: &TranslationSession) -> Self {
        Self {
            status: session.status().to_string(),
            message: session.message(),
        }
    }
}
