//! emoji-translator-core
//!
//! Dictionary, translator and suggester for turning free text into emoji.
//! Everything here is pure: a `Dictionary` is built once at startup and then
//! shared by reference, and `translate`/`suggest` are functions of their input
//! and that dictionary only. The types are `Send + Sync`, so one dictionary
//! can serve any number of threads without locking.
//!
//! Public API:
//! - `Dictionary` / `DictEntry` - ordered key → glyph table with loaders
//! - `Translator` / `translate` - phrase-first greedy translation
//! - `Suggester` / `suggest` - prefix completion of the last typed word
//! - `browse` - substring search over the dictionary
//! - `share_url` / `ShareParams` - shareable link encoding
//! - `Session` - input box state for interactive front ends
//! - `Config` - front-end configuration (TOML)
//!
//! # Example
//! ```
//! use emoji_translator_core::{suggest, translate, Dictionary};
//!
//! let dict = Dictionary::builtin();
//! assert_eq!(translate(&dict, "I love pizza"), "I ❤️🍕");
//! assert_eq!(suggest(&dict, "ha"), vec!["happy: 😊"]);
//! ```
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod builtin;

pub mod browser;
pub use browser::browse;

pub mod dictionary;
pub use dictionary::{DictEntry, Dictionary, DictionaryError, InvalidEntry};

pub mod prefix_index;
pub use prefix_index::PrefixIndex;

pub mod session;
pub use session::Session;

pub mod share;
pub use share::{share_url, ShareParams};

pub mod suggester;
pub use suggester::{suggest, Suggester, Suggestion, DEFAULT_SUGGESTION_LIMIT};

pub mod tokenizer;

pub mod translator;
pub use translator::{translate, Piece, Translator};

/// Front-end configuration.
///
/// Missing fields fall back to their defaults, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of suggestions shown for the word being typed.
    pub suggestion_limit: usize,

    /// Dictionary file (`.json`, `.toml` or compiled `.bin`).
    /// `None` uses the built-in table.
    pub dictionary_path: Option<PathBuf>,

    /// Origin that share links are built against.
    pub share_origin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            dictionary_path: None,
            share_origin: "http://localhost:3000".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Build the configured dictionary: the file if one is set, else the
    /// built-in table.
    pub fn load_dictionary(&self) -> Result<Dictionary, DictionaryError> {
        match &self.dictionary_path {
            Some(path) => Dictionary::load(path),
            None => Ok(Dictionary::builtin()),
        }
    }
}
