//! Wire types of the chat completions API, limited to what a transcription uses.

use serde::{Deserialize, Serialize};

use business::domain::prescription::errors::TranscriptionError;
use business::domain::prescription::model::TranscriptionRequest;

#[derive(Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ChatMessage<'a> {
    System { content: &'a str },
    User { content: Vec<ContentPart<'a>> },
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
pub struct ImageUrl {
    pub url: String,
}

impl<'a> ChatCompletionRequest<'a> {
    /// System instruction first, then the user prompt with the inline image.
    pub fn for_transcription(model: &'a str, request: &'a TranscriptionRequest) -> Self {
        Self {
            model,
            messages: vec![
                ChatMessage::System {
                    content: request.system_instruction(),
                },
                ChatMessage::User {
                    content: vec![
                        ContentPart::Text {
                            text: request.user_prompt(),
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl {
                                url: request.data_url(),
                            },
                        },
                    ],
                },
            ],
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    pub fn parse(body: &str) -> Result<Self, TranscriptionError> {
        serde_json::from_str(body).map_err(|_| TranscriptionError::EndpointFailure)
    }

    /// Content of the first choice, verbatim.
    pub fn into_text(self) -> Result<String, TranscriptionError> {
        self.choices
            .and_then(|choices| choices.into_iter().next())
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or(TranscriptionError::EndpointFailure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::prescription::messages::SYSTEM_INSTRUCTION;
    use business::domain::prescription::model::ImageAsset;
    use serde_json::{Value, json};

    fn request() -> TranscriptionRequest {
        let image = ImageAsset::jpeg(vec![0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
        TranscriptionRequest::for_prescription(&image)
    }

    #[test]
    fn should_serialize_request_in_chat_completions_shape() {
        let request = request();

        let payload = ChatCompletionRequest::for_transcription("gpt-4o", &request);

        let body = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            body,
            json!({
                "model": "gpt-4o",
                "messages": [
                    {"role": "system", "content": SYSTEM_INSTRUCTION},
                    {
                        "role": "user",
                        "content": [
                            {"type": "text", "text": "Clarificame lo que dice la receta medica?"},
                            {
                                "type": "image_url",
                                "image_url": {"url": "data:image/jpeg;base64,/9j/4A=="}
                            }
                        ]
                    }
                ]
            })
        );
    }

    #[test]
    fn should_extract_first_choice_content() {
        let body = r#"{"choices":[{"message":{"content":"Paracetamol 500mg, 95% precisión"}}]}"#;

        let text = ChatCompletionResponse::parse(body).and_then(|r| r.into_text());

        assert_eq!(text.unwrap(), "Paracetamol 500mg, 95% precisión");
    }

    #[test]
    fn should_ignore_choices_after_the_first() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "primera"}},
                {"index": 1, "message": {"role": "assistant", "content": "segunda"}}
            ],
            "usage": {"total_tokens": 42}
        }"#;

        let text = ChatCompletionResponse::parse(body).and_then(|r| r.into_text());

        assert_eq!(text.unwrap(), "primera");
    }

    #[test]
    fn should_fail_with_endpoint_failure_when_choices_missing() {
        let body = r#"{"error":{"message":"Incorrect API key provided"}}"#;

        let text = ChatCompletionResponse::parse(body).and_then(|r| r.into_text());

        assert_eq!(text.unwrap_err(), TranscriptionError::EndpointFailure);
    }

    #[test]
    fn should_fail_with_endpoint_failure_when_choices_empty() {
        let text = ChatCompletionResponse::parse(r#"{"choices":[]}"#).and_then(|r| r.into_text());

        assert_eq!(text.unwrap_err(), TranscriptionError::EndpointFailure);
    }

    #[test]
    fn should_fail_with_endpoint_failure_when_content_is_null() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;

        let text = ChatCompletionResponse::parse(body).and_then(|r| r.into_text());

        assert_eq!(text.unwrap_err(), TranscriptionError::EndpointFailure);
    }

    #[test]
    fn should_fail_with_endpoint_failure_when_body_is_not_json() {
        let result = ChatCompletionResponse::parse("<html>502 Bad Gateway</html>");

        assert_eq!(result.unwrap_err(), TranscriptionError::EndpointFailure);
    }

    #[test]
    fn should_fail_with_endpoint_failure_when_choices_has_wrong_type() {
        let body: Value = json!({"choices": "none"});

        let result = ChatCompletionResponse::parse(&body.to_string());

        assert_eq!(result.unwrap_err(), TranscriptionError::EndpointFailure);
    }
}
