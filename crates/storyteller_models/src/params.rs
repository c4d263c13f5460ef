//! Fixed generation parameters and upstream call style.

use crate::ModelSpec;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use storyteller_error::ConfigError;

/// Which upstream endpoint shape to use.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum CompletionStyle {
    /// Free-text completion (`/completions`)
    #[default]
    #[display("text")]
    Text,
    /// Chat-style completion (`/chat/completions`)
    #[display("chat")]
    Chat,
}

impl FromStr for CompletionStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "completion" | "completions" => Ok(CompletionStyle::Text),
            "chat" => Ok(CompletionStyle::Chat),
            other => Err(format!(
                "Unknown completion style: {} (expected \"text\" or \"chat\")",
                other
            )),
        }
    }
}

/// Generation settings applied to every request.
///
/// These come from server configuration, never from the client request.
///
/// # Examples
///
/// ```
/// use storyteller_models::GenerationParams;
///
/// let params = GenerationParams::default();
/// assert_eq!(params.model(), "gpt-3.5-turbo-instruct");
/// assert_eq!(*params.temperature(), 0.7);
/// assert_eq!(*params.max_tokens(), 1000);
///
/// let custom = GenerationParams::builder()
///     .model("gpt-4")
///     .max_tokens(500u32)
///     .build()?;
/// assert_eq!(*custom.temperature(), 0.7);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into), default)]
pub struct GenerationParams {
    /// Model identifier sent upstream
    model: String,
    /// Sampling temperature
    temperature: f32,
    /// Maximum length of the generated story, in tokens
    max_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: ModelSpec::default().id().to_string(),
            temperature: 0.7,
            max_tokens: 1000,
        }
    }
}

impl GenerationParams {
    /// Creates a new builder for GenerationParams.
    pub fn builder() -> GenerationParamsBuilder {
        GenerationParamsBuilder::default()
    }

    /// Checks the values are usable upstream.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty model, a temperature outside `[0.0, 2.0]`,
    /// or a zero token limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::new("Model identifier must not be empty"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::new(format!(
                "Temperature must be in [0.0, 2.0], got {}",
                self.temperature
            )));
        }
        if self.max_tokens == 0 {
            return Err(ConfigError::new("max_tokens must be greater than zero"));
        }
        Ok(())
    }
}
