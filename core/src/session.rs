//! Interactive translation session.
//!
//! A `Session` models the single-page tool: one input box whose translation
//! and suggestion list are recomputed on every change. The session borrows
//! the dictionary; many sessions can share one `Dictionary`.

use crate::dictionary::Dictionary;
use crate::share::{share_url, ShareParams};
use crate::suggester::{Suggester, Suggestion, DEFAULT_SUGGESTION_LIMIT};
use crate::translator::Translator;

#[derive(Debug, Clone)]
pub struct Session<'d> {
    dict: &'d Dictionary,
    suggestion_limit: usize,
    input: String,
    translation: String,
    suggestions: Vec<Suggestion>,
}

impl<'d> Session<'d> {
    /// Create an empty session.
    pub fn new(dict: &'d Dictionary) -> Self {
        Self {
            dict,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            input: String::new(),
            translation: String::new(),
            suggestions: Vec::new(),
        }
    }

    /// Set how many suggestions are kept (at least 1).
    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit.max(1);
        self.refresh_suggestions();
        self
    }

    /// Restore a session from share-link parameters.
    ///
    /// Nothing is seeded without a non-empty `text`. With `text` and `emoji`,
    /// the shared translation is shown as-is instead of being recomputed.
    pub fn from_share(dict: &'d Dictionary, params: &ShareParams) -> Self {
        let mut session = Self::new(dict);
        if let Some(text) = params.seed_text() {
            session.set_input(text);
            if let Some(emoji) = &params.emoji {
                session.translation = emoji.clone();
            }
        }
        session
    }

    /// Replace the input and recompute translation and suggestions.
    pub fn set_input<S: Into<String>>(&mut self, text: S) {
        self.input = text.into();
        self.translation = Translator::new(self.dict).translate(&self.input);
        self.refresh_suggestions();
    }

    /// Replace the last token of the input with the key of suggestion `index`.
    /// Returns false (and changes nothing) for an out-of-range index.
    pub fn apply_suggestion(&mut self, index: usize) -> bool {
        let Some(chosen) = self.suggestions.get(index) else {
            return false;
        };
        let key = chosen.key.clone();
        let head = self.input.trim_end();
        let start = head
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        let mut next = String::with_capacity(start + key.len());
        next.push_str(&head[..start]);
        next.push_str(&key);
        tracing::debug!(suggestion = %key, "applied suggestion");
        self.set_input(next);
        true
    }

    pub fn clear(&mut self) {
        self.set_input(String::new());
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn dictionary(&self) -> &'d Dictionary {
        self.dict
    }

    /// Share link for the current input and displayed translation.
    pub fn share_url(&self, origin: &str) -> String {
        share_url(origin, &self.input, &self.translation)
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions = Suggester::new(self.dict)
            .with_limit(self.suggestion_limit)
            .suggestions(&self.input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keystrokes_update_translation_and_suggestions() {
        let dict = Dictionary::builtin();
        let mut session = Session::new(&dict);
        session.set_input("I love p");
        assert_eq!(session.translation(), "I ❤️p");
        let keys: Vec<&str> = session.suggestions().iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["pizza", "pasta", "phone", "pen", "play"]);

        session.set_input("I love pizza");
        assert_eq!(session.translation(), "I ❤️🍕");
    }

    #[test]
    fn apply_suggestion_replaces_last_token() {
        let dict = Dictionary::builtin();
        let mut session = Session::new(&dict);
        session.set_input("I love piz");
        assert!(session.apply_suggestion(0));
        assert_eq!(session.input(), "I love pizza");
        assert_eq!(session.translation(), "I ❤️🍕");
    }

    #[test]
    fn apply_suggestion_with_trailing_space_and_bad_index() {
        let dict = Dictionary::builtin();
        let mut session = Session::new(&dict);
        session.set_input("ice  ");
        assert_eq!(session.suggestions()[0].key, "ice cream");
        assert!(session.apply_suggestion(0));
        assert_eq!(session.input(), "ice cream");
        assert_eq!(session.translation(), "🍦");
        assert!(!session.apply_suggestion(9));
        assert_eq!(session.input(), "ice cream");
    }

    #[test]
    fn share_params_seed_session() {
        let dict = Dictionary::builtin();
        let params = ShareParams {
            text: Some("happy cat".into()),
            emoji: Some("custom".into()),
        };
        let session = Session::from_share(&dict, &params);
        assert_eq!(session.input(), "happy cat");
        assert_eq!(session.translation(), "custom");

        let params = ShareParams {
            text: Some("happy cat".into()),
            emoji: None,
        };
        assert_eq!(Session::from_share(&dict, &params).translation(), "😊🐱");

        let params = ShareParams {
            text: None,
            emoji: Some("😊".into()),
        };
        let session = Session::from_share(&dict, &params);
        assert_eq!(session.input(), "");
        assert_eq!(session.translation(), "");
    }

    #[test]
    fn empty_shared_text_seeds_nothing() {
        let dict = Dictionary::builtin();
        let params = ShareParams::parse("?text=&emoji=%F0%9F%98%8A");
        assert_eq!(params.text.as_deref(), Some(""));
        let session = Session::from_share(&dict, &params);
        assert_eq!(session.input(), "");
        assert_eq!(session.translation(), "");
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn share_url_uses_displayed_translation() {
        let dict = Dictionary::builtin();
        let mut session = Session::new(&dict);
        session.set_input("hello");
        let url = session.share_url("https://example.com");
        let back = ShareParams::parse(&url);
        assert_eq!(back.text.as_deref(), Some("hello"));
        assert_eq!(back.emoji.as_deref(), Some("👋"));
    }

    #[test]
    fn limit_applies_to_session() {
        let dict = Dictionary::builtin();
        let mut session = Session::new(&dict).with_suggestion_limit(2);
        session.set_input("s");
        assert_eq!(session.suggestions().len(), 2);
        session.clear();
        assert!(session.suggestions().is_empty());
        assert_eq!(session.translation(), "");
    }
}
