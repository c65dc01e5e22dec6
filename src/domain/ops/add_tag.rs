use generational_arena::Index;
use tracing::{debug, instrument, trace};

use crate::domain::arena::TagTree;
use crate::domain::rules::RewriteRules;
use crate::domain::tokens::WordMatcher;

impl TagTree {
    /// Wraps every whole-word occurrence of `word` in a `tag` element using the
    /// default rules.
    ///
    /// See [`TagTree::add_tag_with`].
    pub fn add_tag(&mut self, word: &str, tag: &str) -> usize {
        self.add_tag_with(word, tag, &RewriteRules::default())
    }

    /// Wraps every case-insensitive whole-word occurrence of `word` in text
    /// leaves with a new `tag` element.
    ///
    /// A non-alphabetic `word` or a `tag` outside `rules.emphasis_tags` is a silent
    /// no-op. Leaves are collected before rewriting, so nodes created here are
    /// never revisited.
    ///
    /// Returns the number of occurrences wrapped.
    #[instrument(level = "debug", skip(self, rules))]
    pub fn add_tag_with(&mut self, word: &str, tag: &str, rules: &RewriteRules) -> usize {
        let Some(matcher) = WordMatcher::new(word, &rules.trailing_punctuation) else {
            debug!(word, "word is not alphabetic, ignoring");
            return 0;
        };
        if !rules.accepts_emphasis(tag) {
            debug!(tag, "tag not allowed for wrapping, ignoring");
            return 0;
        }

        let leaves: Vec<Index> = self
            .iter()
            .filter(|(_, node)| node.is_leaf())
            .map(|(idx, _)| idx)
            .collect();

        let wrapped: usize = leaves
            .into_iter()
            .map(|leaf| self.wrap_words(leaf, &matcher, tag))
            .sum();
        debug!(wrapped, "added tags");
        wrapped
    }

    /// Rewrites one leaf, moving on to each freshly split-off remainder.
    fn wrap_words(&mut self, leaf: Index, matcher: &WordMatcher<'_>, tag: &str) -> usize {
        let mut wrapped = 0;
        let mut current = leaf;
        loop {
            let Some(text) = self.label(current).map(str::to_owned) else {
                break;
            };
            if !matcher.occurs_in(&text) {
                break;
            }
            let Some(split) = matcher.split(&text) else {
                break;
            };
            trace!(matched = split.matched, "wrapping word");

            let word_leaf = self.insert_node(split.matched, None, None);
            let wrapped_at = if split.before.is_empty() {
                // The leaf itself becomes the wrapper
                if let Some(node) = self.get_mut(current) {
                    node.label = tag.to_string();
                    node.child = Some(word_leaf);
                }
                current
            } else {
                if let Some(node) = self.get_mut(current) {
                    node.label = split.before;
                }
                let element = self.insert_node(tag, Some(word_leaf), None);
                self.insert_after(current, element);
                element
            };
            wrapped += 1;

            if split.after.is_empty() {
                break;
            }
            let remainder = self.insert_node(split.after, None, None);
            self.insert_after(wrapped_at, remainder);
            current = remainder;
        }
        wrapped
    }
}
