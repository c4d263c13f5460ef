//! Client for OpenAI-compatible completion APIs.
//!
//! Both the free-text and chat endpoint shapes go through the same client and
//! the same call site; the configured [`CompletionStyle`](crate::CompletionStyle)
//! picks the request body and the field the story text is read from.

mod client;
mod conversions;
mod dto;

pub use client::OpenAiClient;
pub use conversions::extract_text;
pub use dto::{
    ChatChoice, ChatChoiceMessage, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    CompletionBody, TextChoice, TextCompletionRequest, TextCompletionResponse,
};
