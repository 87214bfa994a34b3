use std::env;
use std::time::Duration;

use openai::client::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT, OpenAISettings};

/// Configuration for OpenAI API access.
///
/// Environment variables:
/// - OPENAI_API_KEY: Bearer credential (required by the transcription endpoint only)
/// - OPENAI_BASE_URL: API root (default: "https://api.openai.com/v1")
/// - OPENAI_MODEL: Model identifier (default: "gpt-4o")
/// - OPENAI_TIMEOUT_SECS: Whole-request timeout in seconds (default: 60)
#[derive(Clone, Default)]
pub struct OpenAIConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl OpenAIConfig {
    pub fn from_env() -> Self {
        let timeout_secs = env::var("OPENAI_TIMEOUT_SECS").ok().and_then(|raw| {
            raw.trim()
                .parse::<u64>()
                .inspect_err(|_| {
                    tracing::warn!("OPENAI_TIMEOUT_SECS is not a number, using the default")
                })
                .ok()
        });

        Self {
            api_key: env::var("OPENAI_API_KEY").ok(),
            base_url: env::var("OPENAI_BASE_URL").ok(),
            model: env::var("OPENAI_MODEL").ok(),
            timeout_secs,
        }
    }

    /// Settings for the OpenAI client. A missing key becomes an empty one,
    /// which the client rejects at construction.
    pub fn into_settings(self) -> OpenAISettings {
        OpenAISettings {
            api_key: self.api_key.unwrap_or_default(),
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout: self
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
        }
    }
}
