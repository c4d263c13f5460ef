//! Errors raised by the upstream completion service.

/// Closed set of ways a completion call can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CompletionErrorKind {
    /// The request never produced a readable response
    #[display("Transport error: {}", _0)]
    Transport(String),

    /// The service answered with a non-success status
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Body returned by the service
        message: String,
    },

    /// The response body did not match the expected shape
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),

    /// The service returned no choices, or the first choice had no text
    #[display("No response was returned from the completion service")]
    EmptyResult,
}

impl CompletionErrorKind {
    /// Short machine-friendly label used in logs.
    pub fn category(&self) -> &'static str {
        match self {
            CompletionErrorKind::Transport(_) => "transport",
            CompletionErrorKind::Api { .. } => "api",
            CompletionErrorKind::MalformedResponse(_) => "malformed_response",
            CompletionErrorKind::EmptyResult => "empty_result",
        }
    }
}

/// Completion error with location tracking.
///
/// # Examples
///
/// ```
/// use storyteller_error::{CompletionError, CompletionErrorKind};
///
/// let err = CompletionError::new(CompletionErrorKind::EmptyResult);
/// assert_eq!(err.kind().category(), "empty_result");
/// assert_eq!(err.message(), "No response was returned from the completion service");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Completion Error: {} at line {} in {}", kind, line, file)]
pub struct CompletionError {
    /// The error kind
    pub kind: CompletionErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl CompletionError {
    /// Create a new CompletionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompletionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CompletionErrorKind {
        &self.kind
    }

    /// Caller-facing message, without source location.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Result type for completion calls.
pub type CompletionResult<T> = Result<T, CompletionError>;
