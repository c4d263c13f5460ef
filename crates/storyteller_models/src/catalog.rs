//! Catalog of known completion models.

use crate::CompletionStyle;

/// Models the service knows how to drive.
///
/// See <https://platform.openai.com/docs/models> for the upstream list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelSpec {
    /// GPT-3.5 Turbo, November 2023 snapshot
    Gpt35Turbo1106,
    /// GPT-3.5 Turbo
    Gpt35Turbo,
    /// GPT-3.5 Turbo with a 16k context window
    Gpt35Turbo16k,
    /// GPT-3.5 Turbo Instruct, the only free-text completion model
    #[default]
    Gpt35TurboInstruct,
    /// GPT-4
    Gpt4,
}

impl ModelSpec {
    /// Upstream model identifier.
    pub fn id(&self) -> &'static str {
        match self {
            ModelSpec::Gpt35Turbo1106 => "gpt-3.5-turbo-1106",
            ModelSpec::Gpt35Turbo => "gpt-3.5-turbo",
            ModelSpec::Gpt35Turbo16k => "gpt-3.5-turbo-16k",
            ModelSpec::Gpt35TurboInstruct => "gpt-3.5-turbo-instruct",
            ModelSpec::Gpt4 => "gpt-4",
        }
    }

    /// Endpoint style the model is served through.
    pub fn style(&self) -> CompletionStyle {
        match self {
            ModelSpec::Gpt35TurboInstruct => CompletionStyle::Text,
            ModelSpec::Gpt35Turbo1106
            | ModelSpec::Gpt35Turbo
            | ModelSpec::Gpt35Turbo16k
            | ModelSpec::Gpt4 => CompletionStyle::Chat,
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            ModelSpec::Gpt35Turbo1106 => "GPT-3.5 Turbo (1106 snapshot, chat)",
            ModelSpec::Gpt35Turbo => "GPT-3.5 Turbo (chat)",
            ModelSpec::Gpt35Turbo16k => "GPT-3.5 Turbo 16k (chat, long context)",
            ModelSpec::Gpt35TurboInstruct => "GPT-3.5 Turbo Instruct (text completion, default)",
            ModelSpec::Gpt4 => "GPT-4 (chat, highest quality)",
        }
    }

    /// Parse from an upstream identifier or a short alias.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "gpt-3.5-turbo-1106" | "35turbo1106" => Some(ModelSpec::Gpt35Turbo1106),
            "gpt-3.5-turbo" | "35turbo" => Some(ModelSpec::Gpt35Turbo),
            "gpt-3.5-turbo-16k" | "35turbo16k" => Some(ModelSpec::Gpt35Turbo16k),
            "gpt-3.5-turbo-instruct" | "35turboinstruct" | "instruct" => {
                Some(ModelSpec::Gpt35TurboInstruct)
            }
            "gpt-4" | "gpt4" => Some(ModelSpec::Gpt4),
            _ => None,
        }
    }

    /// List all known models.
    pub fn all() -> &'static [ModelSpec] {
        &[
            ModelSpec::Gpt35Turbo1106,
            ModelSpec::Gpt35Turbo,
            ModelSpec::Gpt35Turbo16k,
            ModelSpec::Gpt35TurboInstruct,
            ModelSpec::Gpt4,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_spec_parsing() {
        assert_eq!(ModelSpec::parse("gpt-4"), Some(ModelSpec::Gpt4));
        assert_eq!(
            ModelSpec::parse("35TurboInstruct"),
            Some(ModelSpec::Gpt35TurboInstruct)
        );
        assert_eq!(ModelSpec::parse("text-davinci-003"), None);
    }

    #[test]
    fn test_ids_round_trip() {
        for spec in ModelSpec::all() {
            assert_eq!(ModelSpec::parse(spec.id()), Some(*spec));
        }
    }

    #[test]
    fn test_default_is_text_style() {
        let spec = ModelSpec::default();
        assert_eq!(spec.id(), "gpt-3.5-turbo-instruct");
        assert_eq!(spec.style(), CompletionStyle::Text);
        assert_eq!(ModelSpec::Gpt4.style(), CompletionStyle::Chat);
    }
}
