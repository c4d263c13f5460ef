//! Service configuration.
//!
//! Values come from three layers, highest precedence first: command line or
//! environment, an optional TOML file, then built-in defaults. The merged
//! result is an immutable [`StorytellerConfig`].

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use storyteller_error::ConfigError;
use storyteller_models::{CompletionStyle, GenerationParams, ModelSpec};
use tracing::{debug, instrument, warn};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default API root for the completion service.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Contents of the optional TOML configuration file.
///
/// ```toml
/// [completion]
/// model = "gpt-3.5-turbo"
/// temperature = 0.9
/// max_tokens = 800
/// style = "chat"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Completion settings
    #[serde(default)]
    pub completion: CompletionFileConfig,
}

/// The `[completion]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionFileConfig {
    /// Model identifier
    #[serde(default)]
    pub model: Option<String>,
    /// Sampling temperature
    #[serde(default)]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Endpoint shape
    #[serde(default)]
    pub style: Option<CompletionStyle>,
}

impl FileConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or the TOML is invalid.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents)
            .map_err(|e| ConfigError::new(format!("Invalid configuration file: {}", e)))
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Listening port
    pub port: u16,
    /// Bearer credential for the completion service
    pub api_key: String,
    /// API root for the completion service
    pub base_url: String,
    /// Model identifier, overriding the file
    pub model: Option<String>,
}

impl Default for ConfigOverrides {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: None,
        }
    }
}

/// Immutable service configuration, built once at startup.
#[derive(Debug, Clone, PartialEq, Getters, Builder)]
#[builder(setter(into))]
pub struct StorytellerConfig {
    /// Listening port
    port: u16,
    /// Bearer credential for the completion service
    api_key: String,
    /// API root for the completion service
    base_url: String,
    /// Generation parameters sent with every request
    params: GenerationParams,
    /// Endpoint shape
    style: CompletionStyle,
}

impl StorytellerConfig {
    /// Creates a new builder.
    pub fn builder() -> StorytellerConfigBuilder {
        StorytellerConfigBuilder::default()
    }

    /// Merges overrides, file values and defaults into one configuration.
    ///
    /// A model id outside the known catalog is passed through with a
    /// warning. Its style is then taken from the file or the default.
    ///
    /// # Errors
    ///
    /// Returns error if the API key is empty or a generation parameter is
    /// out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyteller_models::CompletionStyle;
    /// use storyteller_server::{ConfigOverrides, StorytellerConfig};
    ///
    /// let overrides = ConfigOverrides {
    ///     api_key: "sk-test".into(),
    ///     model: Some("gpt-3.5-turbo".into()),
    ///     ..Default::default()
    /// };
    /// let config = StorytellerConfig::resolve(overrides, None)?;
    /// assert_eq!(*config.port(), 3000);
    /// assert_eq!(*config.style(), CompletionStyle::Chat);
    /// # Ok::<(), storyteller_error::ConfigError>(())
    /// ```
    #[instrument(skip_all)]
    pub fn resolve(
        overrides: ConfigOverrides,
        file: Option<FileConfig>,
    ) -> Result<Self, ConfigError> {
        let completion = file.map(|f| f.completion).unwrap_or_default();
        let defaults = GenerationParams::default();

        if overrides.api_key.trim().is_empty() {
            return Err(ConfigError::new(
                "OPENAI_API_KEY is not set (use --api-key or the environment)",
            ));
        }

        let requested = overrides
            .model
            .or(completion.model)
            .unwrap_or_else(|| defaults.model().clone());

        let (model, catalog_style) = match ModelSpec::parse(&requested) {
            Some(spec) => (spec.id().to_string(), Some(spec.style())),
            None => {
                warn!(model = %requested, "Unknown model id, passing it through unchanged");
                (requested, None)
            }
        };

        let style = completion.style.or(catalog_style).unwrap_or_default();

        let params = GenerationParams::builder()
            .model(model)
            .temperature(completion.temperature.unwrap_or(*defaults.temperature()))
            .max_tokens(completion.max_tokens.unwrap_or(*defaults.max_tokens()))
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid generation parameters: {}", e)))?;
        params.validate()?;

        let config = Self::builder()
            .port(overrides.port)
            .api_key(overrides.api_key)
            .base_url(overrides.base_url)
            .params(params)
            .style(style)
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {}", e)))?;

        debug!(
            port = config.port,
            model = %config.params.model(),
            style = %config.style,
            "Configuration resolved"
        );
        Ok(config)
    }
}
