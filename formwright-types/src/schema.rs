use serde::{Deserialize, Serialize};

use crate::{FieldBlock, FieldBody, FieldOptions};

/// The serialized form of a field block, as sent to the server.
///
/// Produced fresh on every schema snapshot, never persisted client-side.
/// Both choice kinds serialize with the `choice` tag and are distinguished
/// by the `single` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SchemaField {
    /// An informational note.
    Info {
        /// The note text.
        text: String,
    },

    /// A free-text question.
    Text {
        /// The question name.
        name: String,
        /// The default answer, may be empty.
        default: String,
    },

    /// A single- or multi-choice question.
    Choice {
        /// The question name.
        name: String,
        /// True for radio semantics (single_choice), false for checkbox.
        single: bool,
        /// Choice labels in insertion order.
        choices: Vec<String>,
        /// Index of the pre-selected choice, always 0.
        default: usize,
    },

    /// An integer range question.
    Range {
        /// The question name.
        name: String,
        /// Parsed minimum, or the null sentinel when unparseable.
        min: Option<i64>,
        /// Parsed maximum, or the null sentinel when unparseable.
        max: Option<i64>,
        /// Parsed default, or the null sentinel when unparseable.
        default: Option<i64>,
    },
}

impl From<&FieldBlock> for SchemaField {
    fn from(block: &FieldBlock) -> Self {
        match block.body() {
            FieldBody::Info(text) => Self::Info { text: text.clone() },
            FieldBody::Question(question) => match &question.options {
                FieldOptions::Text { default } => Self::Text {
                    name: question.name.clone(),
                    default: default.clone(),
                },
                FieldOptions::Choice { exclusive, choices } => Self::Choice {
                    name: question.name.clone(),
                    single: *exclusive,
                    choices: choices.iter().map(|choice| choice.label.clone()).collect(),
                    default: 0,
                },
                FieldOptions::Range { min, max, default } => Self::Range {
                    name: question.name.clone(),
                    min: parse_bound(min),
                    max: parse_bound(max),
                    default: parse_bound(default),
                },
            },
        }
    }
}

/// Integer coercion for range inputs. Non-numeric entries silently become
/// the missing-value sentinel (serialized as null).
fn parse_bound(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldId, FieldKind};

    fn question_with(options: FieldOptions, name: &str) -> FieldBlock {
        let mut block = FieldBlock::question(FieldId::new(0));
        let FieldBody::Question(question) = block.body_mut() else {
            unreachable!();
        };
        question.name = name.to_string();
        question.options = options;
        block
    }

    #[test]
    fn text_field_serializes_name_and_default() {
        let block = question_with(
            FieldOptions::Text {
                default: "A".to_string(),
            },
            "Q1",
        );
        let json = serde_json::to_value(SchemaField::from(&block)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "text", "name": "Q1", "default": "A"})
        );
    }

    #[test]
    fn range_field_parses_integers() {
        let block = question_with(
            FieldOptions::Range {
                min: "1".to_string(),
                max: "10".to_string(),
                default: "5".to_string(),
            },
            "Rate",
        );
        assert_eq!(
            SchemaField::from(&block),
            SchemaField::Range {
                name: "Rate".to_string(),
                min: Some(1),
                max: Some(10),
                default: Some(5),
            }
        );
    }

    #[test]
    fn unparseable_range_input_becomes_null() {
        let block = question_with(
            FieldOptions::Range {
                min: "lots".to_string(),
                max: String::new(),
                default: "5".to_string(),
            },
            "Rate",
        );
        let json = serde_json::to_value(SchemaField::from(&block)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "range",
                "name": "Rate",
                "min": null,
                "max": null,
                "default": 5,
            })
        );
    }

    #[test]
    fn info_block_serializes_text_only() {
        let mut block = FieldBlock::info(FieldId::new(2));
        let FieldBody::Info(text) = block.body_mut() else {
            unreachable!();
        };
        *text = "Read this first.".to_string();
        let json = serde_json::to_value(SchemaField::from(&block)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "info", "text": "Read this first."})
        );
    }

    #[test]
    fn multi_choice_is_not_single() {
        let mut options = FieldOptions::for_kind(FieldKind::MultiChoice);
        let FieldOptions::Choice { choices, .. } = &mut options else {
            unreachable!();
        };
        choices.push(crate::Choice {
            selector: crate::SelectorKind::Checkbox,
            label: "Red".to_string(),
        });
        let block = question_with(options, "Colors");
        assert_eq!(
            SchemaField::from(&block),
            SchemaField::Choice {
                name: "Colors".to_string(),
                single: false,
                choices: vec!["Red".to_string()],
                default: 0,
            }
        );
    }
}
