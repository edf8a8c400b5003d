//! Prefix index over dictionary keys.
//!
//! Keys are stored in an `fst::Map` whose value is the entry's declaration
//! ordinal. An FST walks keys in byte order, so prefix hits are re-sorted by
//! ordinal before they are returned: callers always see declaration order.

use fst::automaton::{Automaton, Str};
use fst::{IntoStreamer, Map, Streamer};

#[derive(Debug, Clone)]
pub struct PrefixIndex {
    map: Map<Vec<u8>>,
}

impl PrefixIndex {
    /// Build the index from `(ordinal, key)` pairs. Keys must be unique.
    pub fn build<'a, I>(keys: I) -> Result<Self, fst::Error>
    where
        I: IntoIterator<Item = (usize, &'a str)>,
    {
        let mut sorted: Vec<(&str, u64)> = keys
            .into_iter()
            .map(|(ordinal, key)| (key, ordinal as u64))
            .collect();
        sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
        let map = Map::from_iter(sorted)?;
        Ok(Self { map })
    }

    /// Ordinals of every key starting with `prefix`, ascending.
    pub fn ordinals_with_prefix(&self, prefix: &str) -> Vec<usize> {
        let matcher = Str::new(prefix).starts_with();
        let mut stream = self.map.search(matcher).into_stream();
        let mut ordinals = Vec::new();
        while let Some((_, ordinal)) = stream.next() {
            ordinals.push(ordinal as usize);
        }
        ordinals.sort_unstable();
        ordinals
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
