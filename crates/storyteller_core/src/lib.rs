//! Core data types for the Storyteller service.
//!
//! This crate holds the story schema submitted by clients, the validation rules
//! applied to it, and the prompt builder that renders a validated story into the
//! text sent to the completion service.
//!
//! # Example
//!
//! ```
//! use storyteller_core::{Character, Story, build_prompt};
//!
//! let ana = Character::builder()
//!     .given_name("Ana")
//!     .age(30u32)
//!     .occupation("pilot")
//!     .attributes(vec!["brave".to_string()])
//!     .build()?;
//!
//! let story = Story::builder()
//!     .theme("Loss")
//!     .characters(vec![ana])
//!     .location("Tokyo")
//!     .time("2040")
//!     .plot_point("a signal from space")
//!     .ending("bittersweet")
//!     .build()?;
//!
//! let prompt = build_prompt(&story);
//! assert!(prompt.as_str().contains("Title: Loss"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod character;
mod prompt;
mod story;

pub use character::{Character, CharacterBuilder, CharacterBuilderError};
pub use prompt::{Prompt, build_prompt, describe_character, render_characters};
pub use story::{Story, StoryBuilder, StoryBuilderError};
