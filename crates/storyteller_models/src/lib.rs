//! Completion service adapters for Storyteller.
//!
//! The endpoint handler depends only on the [`CompletionDriver`] trait. The
//! shipped implementation is [`OpenAiClient`], which talks to any
//! OpenAI-compatible service in one of two styles selected by configuration:
//!
//! - [`CompletionStyle::Text`]: `POST /completions`, reads `choices[0].text`
//! - [`CompletionStyle::Chat`]: `POST /chat/completions`, reads `choices[0].message.content`
//!
//! # Example
//!
//! ```no_run
//! use storyteller_core::{Character, Story, build_prompt};
//! use storyteller_models::{CompletionDriver, CompletionStyle, GenerationParams, OpenAiClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::new(
//!     std::env::var("OPENAI_API_KEY")?,
//!     "https://api.openai.com/v1",
//!     GenerationParams::default(),
//!     CompletionStyle::Text,
//! );
//!
//! let story = Story::builder()
//!     .theme("Man vs Nature")
//!     .characters(vec![
//!         Character::builder()
//!             .given_name("Bob")
//!             .age(27u32)
//!             .occupation("sailor")
//!             .build()?,
//!     ])
//!     .location("Paris")
//!     .plot_point("A mysterious discovery")
//!     .build()?;
//!
//! let text = client.complete(&build_prompt(&story)).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod driver;
mod openai;
mod params;

pub use catalog::ModelSpec;
pub use driver::CompletionDriver;
pub use openai::{
    ChatChoice, ChatChoiceMessage, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    CompletionBody, OpenAiClient, TextChoice, TextCompletionRequest, TextCompletionResponse,
    extract_text,
};
pub use params::{CompletionStyle, GenerationParams, GenerationParamsBuilder};
