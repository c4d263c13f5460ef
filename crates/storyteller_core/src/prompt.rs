//! Rendering a validated story into the prompt sent to the completion service.

use crate::{Character, Story};
use serde::Serialize;
use tracing::instrument;

/// The rendered prompt. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(transparent)]
pub struct Prompt(String);

impl Prompt {
    /// Borrow the prompt text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Renders one character as a single line.
///
/// `ordinal` is the 1-based position of the character in the story. A missing
/// family name leaves an empty segment after the given name.
///
/// # Examples
///
/// ```
/// use storyteller_core::{Character, describe_character};
///
/// let ana = Character::builder()
///     .given_name("Ana")
///     .age(30u32)
///     .occupation("pilot")
///     .attributes(vec!["brave".to_string()])
///     .build()?;
///
/// assert_eq!(
///     describe_character(1, &ana),
///     "Character 1: Ana , Age: 30, Occupation: pilot, Character Traits: brave"
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn describe_character(ordinal: usize, character: &Character) -> String {
    format!(
        "Character {}: {} {}, Age: {}, Occupation: {}, Character Traits: {}",
        ordinal,
        character.given_name(),
        character.family_name(),
        character.age(),
        character.occupation(),
        character.attributes().join(", ")
    )
}

/// Renders every character, one per line, in submission order.
pub fn render_characters(characters: &[Character]) -> String {
    characters
        .iter()
        .enumerate()
        .map(|(index, character)| describe_character(index + 1, character))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the completion prompt for a story.
///
/// Identical stories always produce byte-identical prompts.
#[instrument(skip_all, fields(characters = story.characters().len()))]
pub fn build_prompt(story: &Story) -> Prompt {
    let characters = render_characters(story.characters());

    let text = format!(
        "Create a short story for a PG-13 audience with the following elements:\n\
         \n\
         Title: {theme}\n\
         Location: {location}\n\
         Time: {time}\n\
         Conflict: {conflict}\n\
         Plot Point: {plot_point}\n\
         Tone: {tone}\n\
         \n\
         {characters}\n\
         \n\
         Please weave these elements into a coherent narrative with a beginning, middle, and end. \
         Write in a {tone} voice, show how the location and time shape the events, and integrate \
         the plot point meaningfully. Use vivid imagery, foreshadowing, and natural dialogue to \
         bring the characters to life. Keep the content suitable for a PG-13 audience and end the \
         story on a {ending} note.\n\
         \n\
         After the story, tag it with exactly three hashtags that capture its themes.",
        theme = story.theme(),
        location = story.location(),
        time = story.time(),
        conflict = story.conflict(),
        plot_point = story.plot_point(),
        tone = story.tone(),
        characters = characters,
        ending = story.ending()
    );

    Prompt(text)
}
