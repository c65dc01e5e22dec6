//! Tree builder for turning a line sequence into a tag tree.

use tracing::{debug, instrument, trace};

use crate::domain::arena::TagTree;
use crate::domain::error::{DomainError, TreeResult};

/// Classification of one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Open(&'a str),
    Close,
    Text(&'a str),
}

impl<'a> Line<'a> {
    pub fn classify(line: &'a str) -> Self {
        if line.starts_with("</") {
            Line::Close
        } else if line.starts_with('<') {
            Line::Open(line)
        } else {
            Line::Text(line)
        }
    }
}

/// Label of an opening marker: every `<` and `>` dropped.
fn marker_label(marker: &str) -> String {
    marker.chars().filter(|c| !matches!(c, '<' | '>')).collect()
}

/// Constructs a [`TagTree`] from one-token-per-line markup.
///
/// The first line is a declaration and is discarded. Open elements are kept on an
/// explicit stack that starts with the root.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    open: Vec<generational_arena::Index>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a line sequence.
    #[instrument(level = "debug", skip(self, lines))]
    pub fn build<I, S>(&mut self, lines: I) -> TreeResult<TagTree>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = lines.into_iter();
        if lines.next().is_none() {
            return Err(DomainError::EmptyDocument);
        }

        let mut tree = TagTree::new();
        self.open.clear();
        self.open.push(tree.root());

        // Line numbers are 1-based and count the discarded declaration
        for (offset, line) in lines.enumerate() {
            let line_no = offset + 2;
            let line = line.as_ref();
            match Line::classify(line) {
                Line::Close => {
                    if self.open.pop().is_none() {
                        return Err(DomainError::UnbalancedClosingMarker { line: line_no });
                    }
                }
                Line::Open(marker) => {
                    let parent = self.top(line_no)?;
                    let element = tree.insert_node(marker_label(marker), None, None);
                    tree.append_child(parent, element);
                    self.open.push(element);
                }
                Line::Text(text) => {
                    let parent = self.top(line_no)?;
                    let leaf = tree.insert_node(text, None, None);
                    tree.append_child(parent, leaf);
                }
            }
            trace!(line = line_no, depth = self.open.len(), "consumed line");
        }

        if self.open.len() > 1 {
            debug!(unclosed = self.open.len() - 1, "elements left open at end of input");
        }
        debug!(nodes = tree.len(), "built tree");
        Ok(tree)
    }

    /// Build from a single string, one token per line.
    pub fn build_from_str(&mut self, input: &str) -> TreeResult<TagTree> {
        self.build(input.lines())
    }

    fn top(&self, line: usize) -> TreeResult<generational_arena::Index> {
        self.open
            .last()
            .copied()
            .ok_or(DomainError::ContentAfterRoot { line })
    }
}
