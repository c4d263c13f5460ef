//! The completion driver seam.

use async_trait::async_trait;
use storyteller_core::Prompt;
use storyteller_error::CompletionResult;

/// Anything that can turn a prompt into story text with one upstream call.
///
/// Implementations must not retry, and must report an empty result as an
/// error rather than returning an empty string.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Generate story text for the prompt.
    async fn complete(&self, prompt: &Prompt) -> CompletionResult<String>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-3.5-turbo-instruct").
    fn model_name(&self) -> &str;
}
