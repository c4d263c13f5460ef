//! The story schema and the validation applied to client submissions.

use crate::Character;
use crate::character::null_as_default;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use storyteller_error::{StoryError, StoryErrorKind};
use tracing::{debug, instrument};

/// Top-level keys that must be present (and non-null) in a story object.
///
/// Each entry lists the canonical name followed by accepted aliases, in
/// order of preference.
const REQUIRED_FIELDS: &[&[&str]] = &[&["theme"], &["location", "setting"], &["plotPoint"]];

/// A story description submitted by a client.
///
/// A story is well-formed only when it has at least one character. Text
/// fields may be empty; `time`, `conflict`, `ending` and `tone` default to
/// empty when the key is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Story {
    /// Central theme, rendered as the story title
    theme: String,
    /// Characters in narrative introduction order
    characters: Vec<Character>,
    /// Where the story takes place
    #[serde(alias = "setting")]
    location: String,
    /// Free-text temporal setting
    #[serde(default, deserialize_with = "null_as_default")]
    #[builder(default)]
    time: String,
    /// Pivotal event the narrative must integrate
    plot_point: String,
    /// Central conflict
    #[serde(default, deserialize_with = "null_as_default")]
    #[builder(default)]
    conflict: String,
    /// Tone of the resolution, e.g. "bittersweet"
    #[serde(default, deserialize_with = "null_as_default")]
    #[builder(default)]
    ending: String,
    /// Narrative voice, e.g. "melancholic"
    #[serde(default, deserialize_with = "null_as_default")]
    #[builder(default)]
    tone: String,
}

impl StoryBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.characters {
            Some(characters) if characters.is_empty() => {
                Err("story must contain at least one character".to_string())
            }
            _ => Ok(()),
        }
    }
}

impl Story {
    /// Creates a new builder for Story.
    pub fn builder() -> StoryBuilder {
        StoryBuilder::default()
    }

    /// Checks the non-empty character invariant.
    pub fn validate(&self) -> Result<(), StoryError> {
        if self.characters.is_empty() {
            return Err(StoryError::new(StoryErrorKind::NoCharacters));
        }
        Ok(())
    }

    /// Extracts and validates the `story` entry of a request body.
    ///
    /// Checks run in a fixed order and the first failure is reported:
    /// story presence, story shape, characters, required fields, then typed
    /// deserialization.
    ///
    /// # Errors
    ///
    /// Returns [`StoryErrorKind::MissingStory`] when there is no story at all,
    /// and another [`StoryErrorKind`] when the story is incomplete.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyteller_core::Story;
    /// use storyteller_error::StoryErrorKind;
    ///
    /// let body = serde_json::json!({});
    /// let err = Story::from_request_body(body.as_object().unwrap()).unwrap_err();
    /// assert_eq!(err.kind(), &StoryErrorKind::MissingStory);
    /// ```
    #[instrument(skip_all)]
    pub fn from_request_body(body: &Map<String, Value>) -> Result<Self, StoryError> {
        let story = match body.get("story") {
            None | Some(Value::Null) => {
                return Err(StoryError::new(StoryErrorKind::MissingStory));
            }
            Some(story) => story,
        };

        let fields = story
            .as_object()
            .ok_or_else(|| StoryError::new(StoryErrorKind::NotAnObject))?;

        match fields.get("characters") {
            Some(Value::Array(characters)) if !characters.is_empty() => {}
            _ => return Err(StoryError::new(StoryErrorKind::NoCharacters)),
        }

        // Aliases collapse onto the canonical key; the first non-null value wins.
        let mut fields = fields.clone();
        for names in REQUIRED_FIELDS {
            let value = names
                .iter()
                .filter_map(|name| fields.get(*name))
                .find(|value| !value.is_null())
                .cloned()
                .ok_or_else(|| {
                    StoryError::new(StoryErrorKind::MissingField(names[0].to_string()))
                })?;
            for name in names.iter() {
                fields.remove(*name);
            }
            fields.insert(names[0].to_string(), value);
        }

        let story: Story = serde_json::from_value(Value::Object(fields))
            .map_err(|e| StoryError::new(StoryErrorKind::Malformed(e.to_string())))?;
        story.validate()?;

        debug!(
            theme = %story.theme,
            characters = story.characters.len(),
            "Story validated"
        );
        Ok(story)
    }
}
