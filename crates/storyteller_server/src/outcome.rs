//! Terminal states of a story request and their HTTP rendering.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use storyteller_error::{CompletionError, StoryErrorKind};

/// Why a request was turned away before any upstream call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rejection {
    /// The body was not a JSON object
    #[display("Bad request")]
    BadRequest,
    /// The body had no usable `story` entry
    #[display("No story data provided")]
    NoStory,
    /// The story failed validation
    #[display("Incomplete story data provided")]
    IncompleteStory,
}

impl Rejection {
    /// Message sent back in the `msg` field.
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::BadRequest => "Bad request",
            Rejection::NoStory => "No story data provided",
            Rejection::IncompleteStory => "Incomplete story data provided",
        }
    }
}

impl From<&StoryErrorKind> for Rejection {
    fn from(kind: &StoryErrorKind) -> Self {
        match kind {
            StoryErrorKind::MissingStory => Rejection::NoStory,
            StoryErrorKind::NotAnObject
            | StoryErrorKind::NoCharacters
            | StoryErrorKind::MissingField(_)
            | StoryErrorKind::Malformed(_) => Rejection::IncompleteStory,
        }
    }
}

/// Result of handling one `create-story` request.
#[derive(Debug)]
pub enum StoryOutcome {
    /// The upstream service produced a story
    Created(String),
    /// The request was rejected before any upstream call
    Rejected(Rejection),
    /// The upstream call failed
    Failed(CompletionError),
}

impl IntoResponse for StoryOutcome {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            StoryOutcome::Created(story) => (StatusCode::OK, json!({ "story": story })),
            StoryOutcome::Rejected(rejection) => (
                StatusCode::BAD_REQUEST,
                json!({ "msg": rejection.message() }),
            ),
            StoryOutcome::Failed(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "msg": "Error generating story",
                    "error": e.message(),
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
