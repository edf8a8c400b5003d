//! Shareable links: `<origin>?text=<input>&emoji=<translation>`.
//!
//! Decoding never fails. Bytes that are not valid UTF-8 become U+FFFD, the
//! same as a browser's query parser.

use std::borrow::Cow;

/// Build a share link for an input and its translation.
///
/// # Example
/// ```
/// use emoji_translator_core::share::share_url;
///
/// assert_eq!(
///     share_url("https://example.com", "I love pizza", "I ❤️🍕"),
///     "https://example.com?text=I%20love%20pizza&emoji=I%20%E2%9D%A4%EF%B8%8F%F0%9F%8D%95"
/// );
/// ```
pub fn share_url(origin: &str, text: &str, emoji: &str) -> String {
    format!(
        "{}?text={}&emoji={}",
        origin.trim_end_matches('/'),
        urlencoding::encode(text),
        urlencoding::encode(emoji)
    )
}

/// The two parameters carried by a share link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareParams {
    pub text: Option<String>,
    pub emoji: Option<String>,
}

impl ShareParams {
    /// Parse a full URL or a bare query string (with or without `?`).
    ///
    /// The first occurrence of each parameter wins; a `#fragment` is ignored.
    pub fn parse(url_or_query: &str) -> Self {
        let without_fragment = url_or_query.split('#').next().unwrap_or_default();
        let query = match without_fragment.split_once('?') {
            Some((_, q)) => q,
            None if without_fragment.contains("://") => "",
            None => without_fragment,
        };

        let mut params = Self::default();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (name, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let slot = match name {
                "text" => &mut params.text,
                "emoji" => &mut params.emoji,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(decode_component(name, raw));
            }
        }
        params
    }

    /// The text a session should be seeded with; an empty `text` counts as absent.
    pub fn seed_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

fn decode_component(name: &str, raw: &str) -> String {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    match String::from_utf8_lossy(&bytes) {
        Cow::Borrowed(value) => value.to_string(),
        Cow::Owned(value) => {
            tracing::warn!(param = name, "share parameter is not valid UTF-8; replaced bad bytes");
            value
        }
    }
}
