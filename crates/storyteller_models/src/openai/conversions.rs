//! Conversions between Storyteller types and the OpenAI wire formats.

use crate::openai::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, CompletionBody,
    TextCompletionRequest, TextCompletionResponse,
};
use crate::{CompletionStyle, GenerationParams};
use storyteller_core::Prompt;
use storyteller_error::{CompletionError, CompletionErrorKind, CompletionResult};

/// System instruction placed ahead of the prompt in chat style.
pub(crate) const CHAT_SYSTEM_PROMPT: &str =
    "You are a creative writer. Please write a short story with the following details.";

/// Builds the upstream request body for the configured style.
pub(crate) fn to_request_body(
    style: CompletionStyle,
    prompt: &Prompt,
    params: &GenerationParams,
) -> CompletionBody {
    match style {
        CompletionStyle::Text => CompletionBody::Text(TextCompletionRequest::new(
            params.model().as_str(),
            prompt.as_str(),
            *params.temperature(),
            *params.max_tokens(),
        )),
        CompletionStyle::Chat => CompletionBody::Chat(ChatCompletionRequest::new(
            params.model().as_str(),
            vec![
                ChatMessage::system(CHAT_SYSTEM_PROMPT),
                ChatMessage::user(prompt.as_str()),
            ],
            *params.temperature(),
            *params.max_tokens(),
        )),
    }
}

/// Extracts the first choice's text from a raw response body.
///
/// # Errors
///
/// - [`CompletionErrorKind::MalformedResponse`] if the body is not the expected JSON
/// - [`CompletionErrorKind::EmptyResult`] if there are no choices or the text is missing or empty
///
/// # Examples
///
/// ```
/// use storyteller_models::{CompletionStyle, extract_text};
/// use storyteller_error::CompletionErrorKind;
///
/// let text = extract_text(CompletionStyle::Text, r#"{"choices":[{"text":"Once upon a time"}]}"#)?;
/// assert_eq!(text, "Once upon a time");
///
/// let err = extract_text(CompletionStyle::Chat, r#"{"choices":[]}"#).unwrap_err();
/// assert_eq!(err.kind(), &CompletionErrorKind::EmptyResult);
/// # Ok::<(), storyteller_error::CompletionError>(())
/// ```
pub fn extract_text(style: CompletionStyle, body: &str) -> CompletionResult<String> {
    let text = match style {
        CompletionStyle::Text => {
            let response: TextCompletionResponse =
                serde_json::from_str(body).map_err(malformed)?;
            response.choices.into_iter().next().and_then(|c| c.text)
        }
        CompletionStyle::Chat => {
            let response: ChatCompletionResponse =
                serde_json::from_str(body).map_err(malformed)?;
            response
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message)
                .and_then(|m| m.content)
        }
    };

    match text {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(CompletionError::new(CompletionErrorKind::EmptyResult)),
    }
}

#[track_caller]
fn malformed(e: serde_json::Error) -> CompletionError {
    CompletionError::new(CompletionErrorKind::MalformedResponse(format!(
        "Failed to parse JSON: {}",
        e
    )))
}
