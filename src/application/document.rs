//! Document facade
//!
//! Builds a tree from a line sequence and applies rewrites under configured rules.

use std::str::FromStr;

use tracing::{debug, instrument};

use crate::application::edit::Edit;
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{RewriteRules, TagTree, TreeBuilder};

#[derive(Debug)]
pub struct Document {
    tree: TagTree,
    rules: RewriteRules,
}

impl Document {
    /// Build a document; the first line is a declaration and is discarded.
    #[instrument(level = "debug", skip(lines, settings))]
    pub fn parse<I, S>(lines: I, settings: &Settings) -> ApplicationResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tree = TreeBuilder::new().build(lines)?;
        Ok(Self {
            tree,
            rules: settings.rules.clone(),
        })
    }

    pub fn tree(&self) -> &TagTree {
        &self.tree
    }

    pub fn rules(&self) -> &RewriteRules {
        &self.rules
    }

    pub fn into_tree(self) -> TagTree {
        self.tree
    }

    pub fn replace_tag(&mut self, old: &str, new: &str) -> usize {
        self.tree.replace_tag(old, new)
    }

    pub fn remove_tag(&mut self, tag: &str) -> usize {
        self.tree.remove_tag_with(tag, &self.rules)
    }

    pub fn add_tag(&mut self, word: &str, tag: &str) -> usize {
        self.tree.add_tag_with(word, tag, &self.rules)
    }

    pub fn bold_row(&mut self, row: usize) -> ApplicationResult<usize> {
        Ok(self.tree.bold_row_with(row, &self.rules)?)
    }

    /// Apply one edit, returning the number of nodes it affected.
    #[instrument(level = "debug", skip(self))]
    pub fn apply(&mut self, edit: &Edit) -> ApplicationResult<usize> {
        let affected = match edit {
            Edit::ReplaceTag { from, to } => self.replace_tag(from, to),
            Edit::RemoveTag { tag } => self.remove_tag(tag),
            Edit::AddTag { word, tag } => self.add_tag(word, tag),
            Edit::BoldRow { row } => self.bold_row(*row)?,
        };
        debug!(affected, "applied edit");
        Ok(affected)
    }

    /// Apply edits in order, stopping at the first failure.
    ///
    /// Edits before the failing one stay applied.
    pub fn apply_all<'a>(
        &mut self,
        edits: impl IntoIterator<Item = &'a Edit>,
    ) -> ApplicationResult<Vec<usize>> {
        edits.into_iter().map(|edit| self.apply(edit)).collect()
    }

    pub fn to_lines(&self) -> Vec<String> {
        self.tree.to_lines()
    }

    pub fn to_html(&self) -> String {
        self.tree.to_html()
    }
}

impl FromStr for Document {
    type Err = ApplicationError;

    /// Build a document from text with default settings.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input.lines(), &Settings::default())
    }
}
