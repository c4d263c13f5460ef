//! HTTP client for OpenAI-compatible completion APIs.

use crate::openai::conversions;
use crate::{CompletionDriver, CompletionStyle, GenerationParams};
use async_trait::async_trait;
use reqwest::Client;
use storyteller_core::Prompt;
use storyteller_error::{CompletionError, CompletionErrorKind, CompletionResult};
use tracing::{debug, error, instrument};

/// Client for any OpenAI-compatible completion API.
///
/// Performs exactly one request per [`complete`](CompletionDriver::complete)
/// call. No retries and no request timeout are applied.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    params: GenerationParams,
    style: CompletionStyle,
}

impl OpenAiClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Bearer token for the service
    /// * `base_url` - API root, e.g. `https://api.openai.com/v1`
    /// * `params` - Fixed generation parameters
    /// * `style` - Which endpoint shape to call
    #[instrument(skip(api_key, base_url, params), fields(model = %params.model(), style = %style))]
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        params: GenerationParams,
        style: CompletionStyle,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(url = %base_url, "Created OpenAI client");

        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url,
            params,
            style,
        }
    }

    /// Full URL the configured style posts to.
    pub fn endpoint(&self) -> String {
        match self.style {
            CompletionStyle::Text => format!("{}/completions", self.base_url),
            CompletionStyle::Chat => format!("{}/chat/completions", self.base_url),
        }
    }

    async fn send(&self, prompt: &Prompt) -> CompletionResult<String> {
        let body = conversions::to_request_body(self.style, prompt, &self.params);
        let url = self.endpoint();

        debug!(url = %url, prompt_len = prompt.as_str().len(), "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                CompletionError::new(CompletionErrorKind::Transport(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            CompletionError::new(CompletionErrorKind::Transport(format!(
                "Failed to read response body: {}",
                e
            )))
        })?;

        if !status.is_success() {
            return Err(CompletionError::new(CompletionErrorKind::Api {
                status: status.as_u16(),
                message: text,
            }));
        }

        debug!(status = %status, bytes = text.len(), "Received completion response");
        conversions::extract_text(self.style, &text)
    }
}

#[async_trait]
impl CompletionDriver for OpenAiClient {
    #[instrument(skip(self, prompt), fields(provider = "openai", model = %self.params.model(), style = %self.style))]
    async fn complete(&self, prompt: &Prompt) -> CompletionResult<String> {
        let result = self.send(prompt).await;

        match &result {
            Ok(story) => debug!(chars = story.len(), "Story generated"),
            Err(e) => error!(
                category = e.kind().category(),
                error = %e.message(),
                "Error generating story"
            ),
        }

        result
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        self.params.model()
    }
}
