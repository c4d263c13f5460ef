//! Story validation errors.

/// Reasons a submitted story cannot be turned into a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StoryErrorKind {
    /// The request body has no `story` entry, or it is null
    #[display("No story data provided")]
    MissingStory,

    /// The `story` entry is not a JSON object
    #[display("Story data must be an object")]
    NotAnObject,

    /// The character list is absent, not a list, or empty
    #[display("Story must contain at least one character")]
    NoCharacters,

    /// A required narrative field is absent
    #[display("Missing required story field: {}", _0)]
    MissingField(String),

    /// The story has every required key but a value has the wrong shape
    #[display("Malformed story data: {}", _0)]
    Malformed(String),
}

/// Story validation error with location tracking.
///
/// # Examples
///
/// ```
/// use storyteller_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::MissingField("theme".into()));
/// assert_eq!(err.kind(), &StoryErrorKind::MissingField("theme".into()));
/// assert!(format!("{}", err).contains("theme"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    kind: StoryErrorKind,
    line: u32,
    file: &'static str,
}

impl StoryError {
    /// Create a new story error with caller location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryErrorKind {
        &self.kind
    }
}

impl From<StoryErrorKind> for StoryError {
    #[track_caller]
    fn from(kind: StoryErrorKind) -> Self {
        Self::new(kind)
    }
}
