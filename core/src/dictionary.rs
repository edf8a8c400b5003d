//! Immutable word/phrase → glyph dictionary.
//!
//! A `Dictionary` is built once (from the built-in table or a dictionary file)
//! and then only read. It is shared by reference with the translator, the
//! suggester and the browser; there is no mutation API.
//!
//! Key rules, checked by every constructor:
//! - keys are already lowercase and unique
//! - a key is one token, or exactly two tokens joined by a single space
//! - a glyph is non-empty, contains no whitespace and, case-folded, is never
//!   itself a key
//!
//! Supported file formats:
//! - JSON: an array of `{"key": ..., "glyph": ...}` objects
//! - TOML: repeated `[[entry]]` tables with `key` and `glyph`
//! - bincode: the compiled artifact written by `save_bincode`

use crate::builtin::BUILTIN_ENTRIES;
use crate::prefix_index::PrefixIndex;
use crate::tokenizer::normalize_key;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use thiserror::Error;

/// A single `(key, glyph)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    pub key: String,
    pub glyph: String,
}

impl DictEntry {
    pub fn new<K: Into<String>, G: Into<String>>(key: K, glyph: G) -> Self {
        Self {
            key: key.into(),
            glyph: glyph.into(),
        }
    }

    /// Number of tokens in the key (1 or 2 for a valid entry).
    pub fn token_count(&self) -> usize {
        self.key.split(' ').count()
    }
}

/// Why an entry was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidEntry {
    #[error("key is empty")]
    EmptyKey,
    #[error("glyph is empty")]
    EmptyGlyph,
    #[error("key is not lowercase")]
    NotLowercase,
    #[error("key must be one token or two tokens joined by a single space")]
    BadTokenShape,
    #[error("duplicate key")]
    DuplicateKey,
    #[error("glyph contains whitespace")]
    WhitespaceInGlyph,
    #[error("glyph {0:?} is also a dictionary key")]
    GlyphIsKey(String),
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON dictionary: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid TOML dictionary: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid bincode dictionary: {0}")]
    Bincode(#[from] bincode::Error),
    #[error("failed to build prefix index: {0}")]
    Index(#[from] fst::Error),
    #[error("invalid entry {key:?}: {reason}")]
    Invalid { key: String, reason: InvalidEntry },
    #[error("unsupported dictionary format {0:?} (expected .json, .toml or .bin)")]
    UnsupportedFormat(String),
}

/// TOML layout: `[[entry]]` tables.
#[derive(Debug, Default, Serialize, Deserialize)]
struct TomlDictionary {
    #[serde(rename = "entry", default)]
    entries: Vec<DictEntry>,
}

/// Ordered, read-only mapping from normalized keys to glyphs.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<DictEntry>,
    by_key: AHashMap<String, usize>,
    prefix_index: PrefixIndex,
}

impl Dictionary {
    /// Build a dictionary from entries in declaration order.
    pub fn from_entries(entries: Vec<DictEntry>) -> Result<Self, DictionaryError> {
        let mut by_key: AHashMap<String, usize> = AHashMap::with_capacity(entries.len());
        for (ordinal, entry) in entries.iter().enumerate() {
            validate_shape(entry).map_err(|reason| invalid(&entry.key, reason))?;
            if by_key.insert(entry.key.clone(), ordinal).is_some() {
                return Err(invalid(&entry.key, InvalidEntry::DuplicateKey));
            }
        }
        // needs the full key set, so runs as a second pass; glyphs are folded
        // the way the translator folds tokens
        for entry in &entries {
            if by_key.contains_key(&normalize_key(&entry.glyph)) {
                return Err(invalid(
                    &entry.key,
                    InvalidEntry::GlyphIsKey(entry.glyph.clone()),
                ));
            }
        }

        let prefix_index = PrefixIndex::build(
            entries
                .iter()
                .enumerate()
                .map(|(ordinal, e)| (ordinal, e.key.as_str())),
        )?;

        tracing::debug!(entries = entries.len(), "dictionary built");
        Ok(Self {
            entries,
            by_key,
            prefix_index,
        })
    }

    /// Convenience constructor from borrowed `(key, glyph)` pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self::from_entries(
            pairs
                .into_iter()
                .map(|(k, g)| DictEntry::new(k, g))
                .collect(),
        )
    }

    /// The curated built-in table.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_ENTRIES.iter().copied())
            .expect("built-in emoji table satisfies dictionary invariants")
    }

    /// Exact lookup of an already-normalized key.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entry(key).map(|e| e.glyph.as_str())
    }

    /// The full entry for an already-normalized key.
    pub fn entry(&self, key: &str) -> Option<&DictEntry> {
        self.by_key.get(key).map(|&ordinal| &self.entries[ordinal])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[DictEntry] {
        &self.entries
    }

    /// Up to `limit` entries whose key starts with `prefix`, in declaration order.
    pub fn with_prefix(&self, prefix: &str, limit: usize) -> Vec<&DictEntry> {
        self.prefix_index
            .ordinals_with_prefix(prefix)
            .into_iter()
            .take(limit)
            .map(|ordinal| &self.entries[ordinal])
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a JSON array of entries.
    pub fn from_json_str(content: &str) -> Result<Self, DictionaryError> {
        let entries: Vec<DictEntry> = serde_json::from_str(content)?;
        Self::from_entries(entries)
    }

    /// Parse a TOML document made of `[[entry]]` tables.
    pub fn from_toml_str(content: &str) -> Result<Self, DictionaryError> {
        let doc: TomlDictionary = toml::from_str(content)?;
        Self::from_entries(doc.entries)
    }

    /// Serialize the entries as a pretty JSON array.
    pub fn to_json_string(&self) -> Result<String, DictionaryError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Load a dictionary file, choosing the format from its extension.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        tracing::debug!(path = %path.display(), format = %ext, "loading dictionary");
        match ext.as_str() {
            "json" => Self::from_json_str(&std::fs::read_to_string(path)?),
            "toml" => Self::from_toml_str(&std::fs::read_to_string(path)?),
            "bin" | "bincode" => Self::load_bincode(path),
            _ => Err(DictionaryError::UnsupportedFormat(ext)),
        }
    }

    /// Save the entries to a file using bincode serialization.
    pub fn save_bincode<P: AsRef<Path>>(&self, path: P) -> Result<(), DictionaryError> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        bincode::serialize_into(writer, &self.entries)?;
        Ok(())
    }

    /// Load a dictionary from a bincode file produced by `save_bincode`.
    ///
    /// The entries are validated again; a compiled file is not trusted.
    pub fn load_bincode<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let entries: Vec<DictEntry> = bincode::deserialize_from(reader)?;
        Self::from_entries(entries)
    }
}

fn invalid(key: &str, reason: InvalidEntry) -> DictionaryError {
    DictionaryError::Invalid {
        key: key.to_string(),
        reason,
    }
}

fn validate_shape(entry: &DictEntry) -> Result<(), InvalidEntry> {
    if entry.key.is_empty() {
        return Err(InvalidEntry::EmptyKey);
    }
    if entry.glyph.is_empty() {
        return Err(InvalidEntry::EmptyGlyph);
    }
    if normalize_key(&entry.key) != entry.key {
        return Err(InvalidEntry::NotLowercase);
    }
    let tokens: Vec<&str> = entry.key.split(' ').collect();
    if tokens.len() > 2
        || tokens
            .iter()
            .any(|t| t.is_empty() || t.chars().any(char::is_whitespace))
    {
        return Err(InvalidEntry::BadTokenShape);
    }
    if entry.glyph.chars().any(char::is_whitespace) {
        return Err(InvalidEntry::WhitespaceInGlyph);
    }
    Ok(())
}
