use serde::{Deserialize, Serialize};

use super::errors::TranscriptionError;

/// Content type of a captured image. Cameras hand over JPEG only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageContentType {
    Jpeg,
}

impl ImageContentType {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageContentType::Jpeg => "image/jpeg",
        }
    }
}

impl std::fmt::Display for ImageContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mime_type())
    }
}

/// Where the capture screen is in its cycle.
///
/// `Idle` until the first translate, `Pending` while a capture or request is
/// outstanding, `Done` once a result or an error has been displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranscriptionStatus {
    Idle,
    Pending,
    Done,
}

impl std::fmt::Display for TranscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranscriptionStatus::Idle => write!(f, "idle"),
            TranscriptionStatus::Pending => write!(f, "pending"),
            TranscriptionStatus::Done => write!(f, "done"),
        }
    }
}

/// Bearer secret for the inference endpoint.
///
/// Never printed: both `Debug` and `Display` redact the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredential(String);

impl ApiCredential {
    /// Fails with [`TranscriptionError::Configuration`] when the secret is
    /// empty or only whitespace.
    pub fn new(secret: impl Into<String>) -> Result<Self, TranscriptionError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(TranscriptionError::Configuration);
        }
        Ok(Self(secret))
    }

    /// Returns the raw secret. Only for building the Authorization header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiCredential(***)")
    }
}

impl std::fmt::Display for ApiCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "***")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_empty_credential() {
        let result = ApiCredential::new("");

        assert_eq!(result.unwrap_err(), TranscriptionError::Configuration);
    }

    #[test]
    fn should_reject_whitespace_only_credential() {
        let result = ApiCredential::new("   \n");

        assert_eq!(result.unwrap_err(), TranscriptionError::Configuration);
    }

    #[test]
    fn should_keep_secret_available_for_the_authorization_header() {
        let credential = ApiCredential::new("sk-test-123").unwrap();

        assert_eq!(credential.expose(), "sk-test-123");
    }

    #[test]
    fn should_redact_secret_when_formatted() {
        let credential = ApiCredential::new("sk-test-123").unwrap();

        assert!(!format!("{:?}", credential).contains("sk-test-123"));
        assert!(!format!("{}", credential).contains("sk-test-123"));
    }

    #[test]
    fn should_report_jpeg_mime_type() {
        assert_eq!(ImageContentType::Jpeg.mime_type(), "image/jpeg");
    }

    #[test]
    fn should_display_status_in_snake_case() {
        assert_eq!(TranscriptionStatus::Idle.to_string(), "idle");
        assert_eq!(TranscriptionStatus::Pending.to_string(), "pending");
        assert_eq!(TranscriptionStatus::Done.to_string(), "done");
    }
}
