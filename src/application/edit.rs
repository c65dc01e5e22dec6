//! Serializable rewrite steps.

use serde::{Deserialize, Serialize};

/// One rewrite applied to a [`Document`](crate::application::Document).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    ReplaceTag { from: String, to: String },
    RemoveTag { tag: String },
    AddTag { word: String, tag: String },
    BoldRow { row: usize },
}

/// An ordered batch of edits, as read from a TOML `[[edits]]` array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EditScript {
    pub edits: Vec<Edit>,
}

impl EditScript {
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_script_from_toml() {
        let script = EditScript::from_toml_str(
            r#"
[[edits]]
op = "replace_tag"
from = "em"
to = "i"

[[edits]]
op = "bold_row"
row = 2

[[edits]]
op = "add_tag"
word = "cat"
tag = "b"

[[edits]]
op = "remove_tag"
tag = "ul"
"#,
        )
        .unwrap();

        assert_eq!(
            script.edits,
            vec![
                Edit::ReplaceTag {
                    from: "em".into(),
                    to: "i".into()
                },
                Edit::BoldRow { row: 2 },
                Edit::AddTag {
                    word: "cat".into(),
                    tag: "b".into()
                },
                Edit::RemoveTag { tag: "ul".into() },
            ]
        );
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        assert!(EditScript::from_toml_str("[[edits]]\nop = \"shuffle\"\n").is_err());
    }
}
