//! Whole-word matching over space-separated text.

use itertools::Itertools;

/// Case-insensitive matcher for one alphabetic word with an optional single
/// trailing punctuation character.
#[derive(Debug, Clone)]
pub struct WordMatcher<'a> {
    word: &'a str,
    punctuation: &'a str,
}

/// A leaf's text cut around the first matching token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSplit<'a> {
    /// Tokens before the match, single-space joined
    pub before: String,
    /// The matched token as written, punctuation included
    pub matched: &'a str,
    /// Tokens after the match, single-space joined
    pub after: String,
}

impl<'a> WordMatcher<'a> {
    /// Returns None unless `word` is non-empty ASCII alphabetic.
    pub fn new(word: &'a str, punctuation: &'a str) -> Option<Self> {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        Some(Self { word, punctuation })
    }

    pub fn matches(&self, token: &str) -> bool {
        let Some(head) = token.get(..self.word.len()) else {
            return false;
        };
        if !head.eq_ignore_ascii_case(self.word) {
            return false;
        }
        let mut tail = token[self.word.len()..].chars();
        match (tail.next(), tail.next()) {
            (None, _) => true,
            (Some(c), None) => self.punctuation.contains(c),
            _ => false,
        }
    }

    /// Cheap pre-check: the word occurs anywhere in `text`, ignoring case.
    pub fn occurs_in(&self, text: &str) -> bool {
        text.to_ascii_lowercase()
            .contains(&self.word.to_ascii_lowercase())
    }

    /// Split `text` on spaces around its first whole-word match.
    pub fn split<'t>(&self, text: &'t str) -> Option<WordSplit<'t>> {
        let tokens: Vec<&str> = text.split(' ').collect();
        let position = tokens.iter().position(|t| self.matches(t))?;
        let join = |part: &[&str]| part.iter().filter(|t| !t.is_empty()).join(" ");
        Some(WordSplit {
            before: join(&tokens[..position]),
            matched: tokens[position],
            after: join(&tokens[position + 1..]),
        })
    }
}
