use serde::{Deserialize, Serialize};

use super::ChatMessage;
use crate::domain::DomainError;

/// Sampling parameters sent with every completion request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

impl SamplingParams {
    /// Used by the four consultation tools.
    pub const STANDARD: Self = Self {
        temperature: 0.7,
        top_p: 0.9,
        max_tokens: 4096,
    };

    /// Longer and more exploratory output for advanced reasoning.
    pub const REASONING: Self = Self {
        temperature: 0.8,
        top_p: 0.95,
        max_tokens: 8192,
    };

    pub fn new(temperature: f32, top_p: f32, max_tokens: u32) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&temperature) {
            return Err(DomainError::invalid_input(format!(
                "temperature must be within [0, 1], got {temperature}"
            )));
        }
        if !(0.0..=1.0).contains(&top_p) {
            return Err(DomainError::invalid_input(format!(
                "top_p must be within [0, 1], got {top_p}"
            )));
        }
        if max_tokens == 0 {
            return Err(DomainError::invalid_input("max_tokens must be positive"));
        }
        Ok(Self {
            temperature,
            top_p,
            max_tokens,
        })
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn top_p(&self) -> f32 {
        self.top_p
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Body of `POST /chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
    stream: bool,
}

impl CompletionRequest {
    pub fn new(
        model: impl Into<String>,
        messages: Vec<ChatMessage>,
        sampling: SamplingParams,
    ) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: sampling.temperature(),
            top_p: sampling.top_p(),
            max_tokens: sampling.max_tokens(),
            stream: false,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Usage,
}

impl CompletionResponse {
    /// Text of the first choice, or `EmptyCompletion` when the model returned none.
    pub fn into_first_content(self) -> Result<String, DomainError> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.into_content())
            .ok_or(DomainError::EmptyCompletion)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    pub message: ChatMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_never_streams() {
        let request = CompletionRequest::new(
            "glm-4-6",
            vec![ChatMessage::user("hello")],
            SamplingParams::STANDARD,
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["stream"], false);
        assert_eq!(json["model"], "glm-4-6");
        assert_eq!(json["max_tokens"], 4096);
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn test_sampling_params_validation() {
        assert!(SamplingParams::new(0.5, 0.5, 100).is_ok());
        assert!(SamplingParams::new(1.5, 0.5, 100).is_err());
        assert!(SamplingParams::new(0.5, -0.1, 100).is_err());
        assert!(SamplingParams::new(0.5, 0.5, 0).is_err());
    }

    #[test]
    fn test_missing_choices_is_empty_completion() {
        let response: CompletionResponse =
            serde_json::from_str(r#"{"id":"x","model":"glm-4-6"}"#).unwrap();
        assert!(matches!(
            response.into_first_content(),
            Err(DomainError::EmptyCompletion)
        ));
    }

    #[test]
    fn test_first_choice_content_is_returned() {
        let response: CompletionResponse = serde_json::from_value(serde_json::json!({
            "id": "chatcmpl-1",
            "created": 1700000000,
            "model": "glm-4-6",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "first"},
                    "finish_reason": "stop"
                },
                {
                    "index": 1,
                    "message": {"role": "assistant", "content": "second"},
                    "finish_reason": "stop"
                }
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12}
        }))
        .unwrap();
        assert_eq!(response.usage.total_tokens, 12);
        assert_eq!(response.into_first_content().unwrap(), "first");
    }
}
