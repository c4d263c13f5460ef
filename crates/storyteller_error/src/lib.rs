//! Error types for the Storyteller service.
//!
//! This crate provides the error types shared by every Storyteller crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storyteller_error::{ConfigError, StorytellerResult};
//!
//! fn load() -> StorytellerResult<String> {
//!     Err(ConfigError::new("OPENAI_API_KEY not set"))?
//! }
//!
//! match load() {
//!     Ok(key) => println!("Got: {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod completion;
mod config;
mod error;
mod server;
mod story;

pub use completion::{CompletionError, CompletionErrorKind, CompletionResult};
pub use config::ConfigError;
pub use error::{StorytellerError, StorytellerErrorKind, StorytellerResult};
pub use server::{ServerError, ServerErrorKind};
pub use story::{StoryError, StoryErrorKind};
