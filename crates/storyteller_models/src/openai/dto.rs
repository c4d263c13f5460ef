//! Data transfer objects for OpenAI-compatible APIs.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Free-text completion request (`POST /completions`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct TextCompletionRequest {
    /// Model identifier
    model: String,
    /// Prompt text
    prompt: String,
    /// Sampling temperature
    temperature: f32,
    /// Maximum tokens to generate
    max_tokens: u32,
}

impl TextCompletionRequest {
    /// Create a request from its parts.
    pub fn new(
        model: impl Into<String>,
        prompt: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            temperature,
            max_tokens,
        }
    }
}

/// A message in the OpenAI chat format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completion request (`POST /chat/completions`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<ChatMessage>,
    /// Sampling temperature
    temperature: f32,
    /// Maximum tokens to generate
    max_tokens: u32,
}

impl ChatCompletionRequest {
    /// Create a request from its parts.
    pub fn new(
        model: impl Into<String>,
        messages: Vec<ChatMessage>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature,
            max_tokens,
        }
    }
}

/// Body sent upstream, one variant per completion style.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CompletionBody {
    /// Free-text completion body
    Text(TextCompletionRequest),
    /// Chat completion body
    Chat(ChatCompletionRequest),
}

/// A choice in a free-text completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct TextChoice {
    /// Generated text
    #[serde(default)]
    pub text: Option<String>,
    /// Reason for finishing
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Free-text completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct TextCompletionResponse {
    /// Response choices
    pub choices: Vec<TextChoice>,
}

/// Message inside a chat choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    /// Role of the message (typically "assistant")
    #[serde(default)]
    pub role: Option<String>,
    /// Generated content
    #[serde(default)]
    pub content: Option<String>,
}

/// A choice in a chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The generated message
    #[serde(default)]
    pub message: Option<ChatChoiceMessage>,
    /// Reason for finishing
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Response choices
    pub choices: Vec<ChatChoice>,
}
