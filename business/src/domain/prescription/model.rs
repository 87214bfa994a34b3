use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::errors::TranscriptionError;
use super::messages::{SYSTEM_INSTRUCTION, USER_PROMPT};
use super::value_objects::ImageContentType;

/// A captured photograph, held only for the duration of one request.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageAsset {
    bytes: Vec<u8>,
    content_type: ImageContentType,
}

impl ImageAsset {
    /// Wraps raw JPEG bytes. Empty input is an unreadable image.
    pub fn jpeg(bytes: Vec<u8>) -> Result<Self, TranscriptionError> {
        if bytes.is_empty() {
            return Err(TranscriptionError::EncodingFailure);
        }
        Ok(Self {
            bytes,
            content_type: ImageContentType::Jpeg,
        })
    }

    /// Decodes an image sent as plain base64 or as a `data:image/...;base64,` URL.
    /// Whitespace and line breaks inside the payload are ignored.
    pub fn from_base64(raw: &str) -> Result<Self, TranscriptionError> {
        let stripped = regex::Regex::new(r"^data:image/[a-z]+;base64,")
            .map(|re| re.replace(raw.trim(), "").to_string())
            .unwrap_or_else(|_| raw.to_string());
        let clean: String = stripped.chars().filter(|c| !c.is_whitespace()).collect();

        let bytes = BASE64
            .decode(clean.as_bytes())
            .map_err(|_| TranscriptionError::EncodingFailure)?;

        Self::jpeg(bytes)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn content_type(&self) -> ImageContentType {
        self.content_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.bytes)
    }
}

impl std::fmt::Debug for ImageAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageAsset")
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// One request to the inference endpoint. Built once per translate action
/// and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionRequest {
    id: Uuid,
    system_instruction: &'static str,
    user_prompt: &'static str,
    image_base64: String,
    content_type: ImageContentType,
}

impl TranscriptionRequest {
    /// Builds the prescription request for a captured image.
    pub fn for_prescription(image: &ImageAsset) -> Self {
        Self {
            id: Uuid::new_v4(),
            system_instruction: SYSTEM_INSTRUCTION,
            user_prompt: USER_PROMPT,
            image_base64: image.to_base64(),
            content_type: image.content_type(),
        }
    }

    /// Identifier used to correlate log lines of a single request.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn system_instruction(&self) -> &str {
        self.system_instruction
    }

    pub fn user_prompt(&self) -> &str {
        self.user_prompt
    }

    pub fn image_base64(&self) -> &str {
        &self.image_base64
    }

    /// Inline image URL, e.g. `data:image/jpeg;base64,/9j/4AAQ...`.
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type.mime_type(),
            self.image_base64
        )
    }
}

/// Text returned by the endpoint, exactly as produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptionResult {
    pub text: String,
    pub completed_at: DateTime<Utc>,
}

impl TranscriptionResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed_at: Utc::now(),
        }
    }
}
