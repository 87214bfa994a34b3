use std::time::Duration;

use reqwest::Client;
use url::Url;

use business::domain::prescription::errors::TranscriptionError;
use business::domain::prescription::value_objects::ApiCredential;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings for reaching the OpenAI API.
#[derive(Clone)]
pub struct OpenAISettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl OpenAISettings {
    /// Settings for the public OpenAI API with the default model and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Shared OpenAI HTTP client configuration.
///
/// Built once at startup. An empty API key or an unusable base URL is
/// rejected here, before any request can be attempted.
pub struct OpenAIClient {
    pub client: Client,
    credential: ApiCredential,
    base_url: Url,
    model: String,
}

impl OpenAIClient {
    pub fn new(settings: OpenAISettings) -> Result<Self, TranscriptionError> {
        let credential = ApiCredential::new(settings.api_key)?;

        let base_url =
            Url::parse(&settings.base_url).map_err(|_| TranscriptionError::Configuration)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(TranscriptionError::Configuration);
        }

        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|_| TranscriptionError::Configuration)?;

        Ok(Self {
            client,
            credential,
            base_url,
            model: settings.model,
        })
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.credential.expose())
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.base_url.as_str().trim_end_matches('/')
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_point_to_public_chat_completions_endpoint_by_default() {
        let client = OpenAIClient::new(OpenAISettings::new("sk-test")).unwrap();

        assert_eq!(
            client.chat_completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(client.model(), "gpt-4o");
    }

    #[test]
    fn should_build_bearer_authorization_header() {
        let client = OpenAIClient::new(OpenAISettings::new("sk-test")).unwrap();

        assert_eq!(client.auth_header(), "Bearer sk-test");
    }

    #[test]
    fn should_reject_missing_api_key_at_construction() {
        let result = OpenAIClient::new(OpenAISettings::new(""));

        assert!(matches!(result, Err(TranscriptionError::Configuration)));
    }

    #[test]
    fn should_reject_invalid_base_url() {
        let settings = OpenAISettings {
            base_url: "not a url".to_string(),
            ..OpenAISettings::new("sk-test")
        };

        let result = OpenAIClient::new(settings);

        assert!(matches!(result, Err(TranscriptionError::Configuration)));
    }

    #[test]
    fn should_reject_non_http_base_url() {
        let settings = OpenAISettings {
            base_url: "ftp://api.openai.com/v1".to_string(),
            ..OpenAISettings::new("sk-test")
        };

        let result = OpenAIClient::new(settings);

        assert!(matches!(result, Err(TranscriptionError::Configuration)));
    }

    #[test]
    fn should_not_double_slash_when_base_url_has_trailing_slash() {
        let settings = OpenAISettings {
            base_url: "http://127.0.0.1:8089/v1/".to_string(),
            ..OpenAISettings::new("sk-test")
        };

        let client = OpenAIClient::new(settings).unwrap();

        assert_eq!(
            client.chat_completions_url(),
            "http://127.0.0.1:8089/v1/chat/completions"
        );
    }
}
