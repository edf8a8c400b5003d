//! Dictionary browsing: list every entry, or filter by a search term.
//!
//! Unlike the suggester this matches the term anywhere in the key, not only
//! as a prefix.

use crate::dictionary::{DictEntry, Dictionary};
use crate::tokenizer::normalize_key;

/// Entries whose key contains `term` (case-insensitive), in declaration order.
/// A blank term lists the whole dictionary.
pub fn browse<'d>(dict: &'d Dictionary, term: &str) -> Vec<&'d DictEntry> {
    let term = normalize_key(term.trim());
    if term.is_empty() {
        return dict.entries().iter().collect();
    }
    dict.entries()
        .iter()
        .filter(|e| e.key.contains(term.as_str()))
        .collect()
}
