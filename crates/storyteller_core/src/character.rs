//! Characters appearing in a submitted story.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Deserializer, Serialize};

/// A character in a story, identified only by its position in the list.
///
/// Cosmetic details are lenient: `familyName` and `attributes` may be absent
/// or null and default to empty.
///
/// # Examples
///
/// ```
/// use storyteller_core::Character;
///
/// let json = serde_json::json!({ "givenName": "Ana", "age": 30, "occupation": "pilot" });
/// let character: Character = serde_json::from_value(json)?;
///
/// assert_eq!(character.given_name(), "Ana");
/// assert_eq!(character.family_name(), "");
/// assert!(character.attributes().is_empty());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct Character {
    /// Given name
    given_name: String,
    /// Family name, empty when not supplied
    #[serde(default, deserialize_with = "null_as_default")]
    #[builder(default)]
    family_name: String,
    /// Age in years
    age: u32,
    /// Character traits in the order they were submitted
    #[serde(default, deserialize_with = "null_as_default")]
    #[builder(default)]
    attributes: Vec<String>,
    /// Occupation
    occupation: String,
}

impl Character {
    /// Creates a new builder for Character.
    pub fn builder() -> CharacterBuilder {
        CharacterBuilder::default()
    }
}

/// Treats an explicit JSON `null` the same as an absent key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
