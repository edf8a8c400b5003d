//! Whitespace tokenization shared by the translator, suggester and browser.
//!
//! Tokens are borrowed slices of the caller's text. Runs of whitespace are
//! collapsed and leading/trailing whitespace is discarded, so an empty token
//! is never produced.

/// Split `text` into whitespace-delimited tokens, in order.
///
/// # Example
/// ```
/// use emoji_translator_core::tokenizer::tokenize;
///
/// assert_eq!(tokenize("  good \t morning\n"), vec!["good", "morning"]);
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// The last token of `text`, i.e. the word currently being typed.
pub fn last_token(text: &str) -> Option<&str> {
    text.split_whitespace().next_back()
}

/// Case-fold a token into dictionary key form.
pub fn normalize_key(token: &str) -> String {
    token.to_lowercase()
}

/// Join two tokens into a two-token dictionary key.
pub fn phrase_key(first: &str, second: &str) -> String {
    let mut key = normalize_key(first);
    key.push(' ');
    key.push_str(&normalize_key(second));
    key
}
