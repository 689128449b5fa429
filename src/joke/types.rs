//! Wire types for the chat-completion API

use crate::config::JokeConfig;
use serde::{Deserialize, Serialize};

/// Role of a message in the request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single message in the request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request body POSTed to the endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ChatRequest {
    /// Build the one-prompt request described by `config`
    pub fn from_config(config: &JokeConfig) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![ChatMessage::user(config.prompt.clone())],
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

/// Success response body. Every level is optional, including individual
/// choices; absent content is not an error.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Option<Vec<Option<Choice>>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Content of the first choice, if any
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .as_ref()?
            .first()?
            .as_ref()?
            .message
            .as_ref()?
            .content
            .as_deref()
    }
}

/// Error response body, e.g. `{"error":{"message":"rate limited"}}`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<ApiErrorDetail>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Server-provided message, if present and non-empty
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_ref()?
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
    }
}
