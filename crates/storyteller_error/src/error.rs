//! Top-level error wrapper types.

use crate::{CompletionError, ConfigError, ServerError, StoryError};

/// Every error a Storyteller crate can surface.
///
/// # Examples
///
/// ```
/// use storyteller_error::{ConfigError, StorytellerError};
///
/// let config_err = ConfigError::new("Missing api key");
/// let err: StorytellerError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StorytellerErrorKind {
    /// Story validation error
    #[from(StoryError)]
    Story(StoryError),
    /// Upstream completion error
    #[from(CompletionError)]
    Completion(CompletionError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Storyteller error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyteller_error::{StoryError, StoryErrorKind, StorytellerErrorKind, StorytellerResult};
///
/// fn validate() -> StorytellerResult<()> {
///     Err(StoryError::new(StoryErrorKind::NoCharacters))?
/// }
///
/// let err = validate().unwrap_err();
/// assert!(matches!(err.kind(), StorytellerErrorKind::Story(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyteller Error: {}", _0)]
pub struct StorytellerError(Box<StorytellerErrorKind>);

impl StorytellerError {
    /// Create a new error from a kind.
    pub fn new(kind: StorytellerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StorytellerErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to StorytellerErrorKind
impl<T> From<T> for StorytellerError
where
    T: Into<StorytellerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storyteller operations.
pub type StorytellerResult<T> = std::result::Result<T, StorytellerError>;
