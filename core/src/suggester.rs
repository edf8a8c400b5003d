//! Prefix completion for the word currently being typed.
//!
//! The last token of the input is lowercased and matched as a prefix against
//! every key. Matches keep dictionary declaration order (no re-ranking) and
//! the list is cut at the configured limit.

use crate::dictionary::{DictEntry, Dictionary};
use crate::tokenizer::{last_token, normalize_key};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of suggestions offered unless configured otherwise.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// A completion candidate. Displays as `"<key>: <glyph>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub key: String,
    pub glyph: String,
}

impl From<&DictEntry> for Suggestion {
    fn from(entry: &DictEntry) -> Self {
        Self {
            key: entry.key.clone(),
            glyph: entry.glyph.clone(),
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.glyph)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Suggester<'d> {
    dict: &'d Dictionary,
    limit: usize,
}

impl<'d> Suggester<'d> {
    pub fn new(dict: &'d Dictionary) -> Self {
        Self {
            dict,
            limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Cap the number of suggestions (at least 1).
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Completions for the last token of `text`; empty when there is none.
    pub fn suggestions(&self, text: &str) -> Vec<Suggestion> {
        let Some(token) = last_token(text) else {
            return Vec::new();
        };
        let prefix = normalize_key(token);
        self.dict
            .with_prefix(&prefix, self.limit)
            .into_iter()
            .map(Suggestion::from)
            .collect()
    }

    /// Completions formatted as `"<key>: <glyph>"`.
    pub fn suggest(&self, text: &str) -> Vec<String> {
        self.suggestions(text)
            .iter()
            .map(Suggestion::to_string)
            .collect()
    }
}

/// Up to five formatted completions for the last token of `text`.
pub fn suggest(dict: &Dictionary, text: &str) -> Vec<String> {
    Suggester::new(dict).suggest(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_suggestions() {
        let dict = Dictionary::builtin();
        assert!(suggest(&dict, "").is_empty());
        assert!(suggest(&dict, "   ").is_empty());
    }

    #[test]
    fn prefix_matches_in_declaration_order() {
        let dict = Dictionary::builtin();
        assert_eq!(suggest(&dict, "ha"), vec!["happy: 😊"]);
        assert_eq!(
            suggest(&dict, "s"),
            vec!["sad: 😢", "smile: 😃", "sushi: 🍱", "salad: 🥗", "sandwich: 🥪"]
        );
    }

    #[test]
    fn completes_last_token_only() {
        let dict = Dictionary::builtin();
        assert_eq!(suggest(&dict, "I love piz"), vec!["pizza: 🍕"]);
        assert_eq!(
            suggest(&dict, "Hello CO"),
            vec!["cool: 😎", "coffee: ☕", "cold: ❄️", "computer: 💻"]
        );
    }

    #[test]
    fn full_key_still_suggests_itself() {
        let dict = Dictionary::builtin();
        assert_eq!(suggest(&dict, "cat"), vec!["cat: 🐱"]);
    }

    #[test]
    fn first_token_of_phrase_suggests_phrases() {
        let dict = Dictionary::builtin();
        assert_eq!(
            suggest(&dict, "good"),
            vec!["good morning: 🌅", "good night: 🌙", "goodbye: 👋"]
        );
    }

    #[test]
    fn limit_is_configurable() {
        let dict = Dictionary::builtin();
        let s = Suggester::new(&dict).with_limit(2);
        assert_eq!(s.suggest("s").len(), 2);
        assert_eq!(Suggester::new(&dict).with_limit(0).limit(), 1);
    }

    #[test]
    fn display_format() {
        let s = Suggestion {
            key: "ice cream".into(),
            glyph: "🍦".into(),
        };
        assert_eq!(s.to_string(), "ice cream: 🍦");
    }
}
