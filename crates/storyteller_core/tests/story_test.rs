//! Tests for request body validation and story construction.

use serde_json::{Map, Value, json};
use storyteller_core::{Character, Story};
use storyteller_error::StoryErrorKind;

fn body(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("test body must be an object")
}

fn complete_story() -> Value {
    json!({
        "theme": "Loss",
        "characters": [
            { "givenName": "Ana", "age": 30, "occupation": "pilot", "attributes": ["brave"] }
        ],
        "location": "Tokyo",
        "time": "2040",
        "plotPoint": "a signal from space",
        "conflict": "duty vs family",
        "ending": "bittersweet",
        "tone": "melancholic"
    })
}

fn kind_of(value: Value) -> StoryErrorKind {
    Story::from_request_body(&body(value))
        .expect_err("story should be rejected")
        .kind()
        .clone()
}

#[test]
fn test_complete_story_parses() -> anyhow::Result<()> {
    let story = Story::from_request_body(&body(json!({ "story": complete_story() })))?;

    assert_eq!(story.theme(), "Loss");
    assert_eq!(story.location(), "Tokyo");
    assert_eq!(story.plot_point(), "a signal from space");
    assert_eq!(story.characters().len(), 1);
    assert_eq!(story.characters()[0].given_name(), "Ana");
    Ok(())
}

#[test]
fn test_missing_story_key() {
    assert_eq!(kind_of(json!({})), StoryErrorKind::MissingStory);
    assert_eq!(
        kind_of(json!({ "tale": complete_story() })),
        StoryErrorKind::MissingStory
    );
}

#[test]
fn test_null_story_is_missing() {
    assert_eq!(
        kind_of(json!({ "story": null })),
        StoryErrorKind::MissingStory
    );
}

#[test]
fn test_story_must_be_object() {
    assert_eq!(
        kind_of(json!({ "story": "once upon a time" })),
        StoryErrorKind::NotAnObject
    );
    assert_eq!(
        kind_of(json!({ "story": [1, 2] })),
        StoryErrorKind::NotAnObject
    );
}

#[test]
fn test_empty_characters_rejected_regardless_of_other_fields() {
    let mut story = complete_story();
    story["characters"] = json!([]);
    assert_eq!(
        kind_of(json!({ "story": story })),
        StoryErrorKind::NoCharacters
    );

    // Characters are checked before any other field.
    assert_eq!(
        kind_of(json!({ "story": { "characters": [] } })),
        StoryErrorKind::NoCharacters
    );
}

#[test]
fn test_missing_characters_rejected() {
    let mut story = complete_story();
    story.as_object_mut().unwrap().remove("characters");
    assert_eq!(
        kind_of(json!({ "story": story })),
        StoryErrorKind::NoCharacters
    );

    let mut story = complete_story();
    story["characters"] = json!("Ana");
    assert_eq!(
        kind_of(json!({ "story": story })),
        StoryErrorKind::NoCharacters
    );
}

#[test]
fn test_required_fields() {
    for (key, reported) in [
        ("theme", "theme"),
        ("location", "location"),
        ("plotPoint", "plotPoint"),
    ] {
        let mut story = complete_story();
        story.as_object_mut().unwrap().remove(key);
        assert_eq!(
            kind_of(json!({ "story": story })),
            StoryErrorKind::MissingField(reported.to_string())
        );

        let mut story = complete_story();
        story[key] = Value::Null;
        assert_eq!(
            kind_of(json!({ "story": story })),
            StoryErrorKind::MissingField(reported.to_string())
        );
    }
}

#[test]
fn test_setting_alias_for_location() -> anyhow::Result<()> {
    let mut story = complete_story();
    let fields = story.as_object_mut().unwrap();
    fields.remove("location");
    fields.insert("setting".to_string(), json!("Paris"));

    let story = Story::from_request_body(&body(json!({ "story": story })))?;
    assert_eq!(story.location(), "Paris");
    Ok(())
}

#[test]
fn test_location_wins_over_setting() -> anyhow::Result<()> {
    let mut story = complete_story();
    story["setting"] = json!("Paris");

    let story = Story::from_request_body(&body(json!({ "story": story })))?;
    assert_eq!(story.location(), "Tokyo");
    Ok(())
}

#[test]
fn test_null_setting_is_ignored() -> anyhow::Result<()> {
    let mut story = complete_story();
    story["setting"] = Value::Null;

    let story = Story::from_request_body(&body(json!({ "story": story })))?;
    assert_eq!(story.location(), "Tokyo");
    Ok(())
}

#[test]
fn test_null_location_falls_back_to_setting() -> anyhow::Result<()> {
    let mut story = complete_story();
    story["location"] = Value::Null;
    story["setting"] = json!("Paris");

    let story = Story::from_request_body(&body(json!({ "story": story })))?;
    assert_eq!(story.location(), "Paris");
    Ok(())
}

#[test]
fn test_empty_text_fields_are_accepted() -> anyhow::Result<()> {
    let mut story = complete_story();
    story["theme"] = json!("");
    story["plotPoint"] = json!("");

    let story = Story::from_request_body(&body(json!({ "story": story })))?;
    assert_eq!(story.theme(), "");
    Ok(())
}

#[test]
fn test_optional_text_fields_default_to_empty() -> anyhow::Result<()> {
    let story = Story::from_request_body(&body(json!({
        "story": {
            "theme": "Man vs Nature",
            "characters": [{ "givenName": "Bob", "age": 27, "occupation": "sailor" }],
            "setting": "Paris",
            "plotPoint": "A mysterious discovery"
        }
    })))?;

    assert_eq!(story.time(), "");
    assert_eq!(story.conflict(), "");
    assert_eq!(story.ending(), "");
    assert_eq!(story.tone(), "");
    Ok(())
}

#[test]
fn test_missing_attributes_is_not_a_failure() -> anyhow::Result<()> {
    let mut story = complete_story();
    story["characters"] = json!([{ "givenName": "Ana", "age": 30, "occupation": "pilot" }]);

    let story = Story::from_request_body(&body(json!({ "story": story })))?;
    assert!(story.characters()[0].attributes().is_empty());
    assert_eq!(story.characters()[0].family_name(), "");
    Ok(())
}

#[test]
fn test_wrong_types_are_malformed() {
    let mut story = complete_story();
    story["characters"] = json!([
        { "givenName": "Ana", "age": "thirty", "occupation": "pilot" }
    ]);
    assert!(matches!(
        kind_of(json!({ "story": story })),
        StoryErrorKind::Malformed(_)
    ));

    let mut story = complete_story();
    story["characters"] = json!([{ "givenName": "Ana", "age": 30 }]);
    assert!(matches!(
        kind_of(json!({ "story": story })),
        StoryErrorKind::Malformed(_)
    ));

    let mut story = complete_story();
    story["theme"] = json!(42);
    assert!(matches!(
        kind_of(json!({ "story": story })),
        StoryErrorKind::Malformed(_)
    ));
}

#[test]
fn test_builder_rejects_empty_characters() {
    let result = Story::builder()
        .theme("Loss")
        .characters(Vec::<Character>::new())
        .location("Tokyo")
        .plot_point("a signal from space")
        .build();
    assert!(result.is_err());
}

#[test]
fn test_builder_requires_theme() -> anyhow::Result<()> {
    let ana = Character::builder()
        .given_name("Ana")
        .age(30u32)
        .occupation("pilot")
        .build()?;

    let result = Story::builder()
        .characters(vec![ana])
        .location("Tokyo")
        .plot_point("a signal from space")
        .build();
    assert!(result.is_err());
    Ok(())
}
