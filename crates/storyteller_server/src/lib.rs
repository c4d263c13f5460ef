//! HTTP front end for the Storyteller service.
//!
//! Exposes `POST /api/v1/create-story`, which turns a JSON story description
//! into a generated short story, and `GET /health` for liveness checks.
//!
//! Each request moves through a fixed pipeline:
//!
//! 1. [`verify_request`] checks the body is a JSON object
//! 2. [`Story::from_request_body`](storyteller_core::Story::from_request_body) validates the story
//! 3. [`build_prompt`](storyteller_core::build_prompt) renders the prompt
//! 4. a [`CompletionDriver`](storyteller_models::CompletionDriver) produces the text
//!
//! and ends in a [`StoryOutcome`] that maps onto an HTTP response.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod observability;
mod outcome;
mod verify;

pub use api::{AppState, create_router};
pub use config::{
    CompletionFileConfig, ConfigOverrides, DEFAULT_BASE_URL, DEFAULT_PORT, FileConfig,
    StorytellerConfig, StorytellerConfigBuilder,
};
pub use observability::{ObservabilityConfig, init_observability_with_config};
pub use outcome::{Rejection, StoryOutcome};
pub use verify::verify_request;
