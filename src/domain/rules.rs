//! Tag sets and punctuation consulted by the rewrite operations.

use serde::{Deserialize, Serialize};

/// How RemoveTag treats a given tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovePolicy {
    /// The wrapper disappears and its children take its place.
    Unwrap,
    /// Like [`RemovePolicy::Unwrap`], but every item is relabelled first.
    UnwrapList,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RewriteRules {
    /// Tags RemoveTag unwraps in place
    pub unwrap_tags: Vec<String>,
    /// List containers RemoveTag flattens into paragraphs
    pub list_tags: Vec<String>,
    /// Label given to each former list item
    pub list_item_label: String,
    /// Tags AddTag may wrap words in
    pub emphasis_tags: Vec<String>,
    /// Characters allowed as a single trailing suffix on a matched word
    pub trailing_punctuation: String,
    /// Wrapper label BoldRow inserts into each cell
    pub bold_label: String,
}

impl Default for RewriteRules {
    fn default() -> Self {
        Self {
            unwrap_tags: vec!["b".into(), "em".into(), "p".into()],
            list_tags: vec!["ol".into(), "ul".into()],
            list_item_label: "p".into(),
            emphasis_tags: vec!["b".into(), "em".into()],
            trailing_punctuation: ".?!,".into(),
            bold_label: "b".into(),
        }
    }
}

impl RewriteRules {
    pub fn removal_policy(&self, tag: &str) -> Option<RemovePolicy> {
        if self.unwrap_tags.iter().any(|t| t == tag) {
            Some(RemovePolicy::Unwrap)
        } else if self.list_tags.iter().any(|t| t == tag) {
            Some(RemovePolicy::UnwrapList)
        } else {
            None
        }
    }

    pub fn accepts_emphasis(&self, tag: &str) -> bool {
        self.emphasis_tags.iter().any(|t| t == tag)
    }
}
