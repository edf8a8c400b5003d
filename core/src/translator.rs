//! Text → glyph translation.
//!
//! Greedy, leftmost, longest-match-first over whitespace tokens:
//! 1. if the token and its right neighbour form a two-token key, emit that
//!    glyph and consume both tokens
//! 2. otherwise, if the token alone is a key, emit its glyph
//! 3. otherwise emit the token itself (original casing) as a literal
//!
//! Only strictly adjacent pairs are tried; a token is never skipped to look
//! further ahead.
//!
//! Rendering: glyphs are concatenated with no separator, and every literal is
//! followed by one space except when it is the last piece. So
//! `"I love pizza"` renders as `"I ❤️🍕"`.

use crate::dictionary::Dictionary;
use crate::tokenizer::{normalize_key, phrase_key, tokenize};

/// One emitted unit of a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// A dictionary hit; `key` is the matched (normalized) dictionary key.
    Glyph { key: &'a str, glyph: &'a str },
    /// A token with no dictionary entry, in its original casing.
    Literal(&'a str),
}

impl<'a> Piece<'a> {
    pub fn is_literal(&self) -> bool {
        matches!(self, Piece::Literal(_))
    }

    pub fn text(&self) -> &'a str {
        match *self {
            Piece::Glyph { glyph, .. } => glyph,
            Piece::Literal(token) => token,
        }
    }
}

/// Translator bound to a shared dictionary.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'d> {
    dict: &'d Dictionary,
}

impl<'d> Translator<'d> {
    pub fn new(dict: &'d Dictionary) -> Self {
        Self { dict }
    }

    /// The sequence of pieces `text` translates to.
    ///
    /// Glyph pieces borrow from the dictionary and literal pieces from `text`,
    /// hence the shared lifetime.
    pub fn pieces<'a>(&self, text: &'a str) -> Vec<Piece<'a>>
    where
        'd: 'a,
    {
        let tokens = tokenize(text);
        let mut pieces = Vec::with_capacity(tokens.len());
        let mut i = 0;
        while i < tokens.len() {
            if let Some(next) = tokens.get(i + 1) {
                let key = phrase_key(tokens[i], next);
                if let Some(piece) = self.glyph_piece(&key) {
                    tracing::trace!(phrase = %key, "phrase match");
                    pieces.push(piece);
                    i += 2;
                    continue;
                }
            }
            let key = normalize_key(tokens[i]);
            match self.glyph_piece(&key) {
                Some(piece) => pieces.push(piece),
                None => pieces.push(Piece::Literal(tokens[i])),
            }
            i += 1;
        }
        pieces
    }

    /// Translate `text` into its glyph/word-mixed rendering.
    pub fn translate(&self, text: &str) -> String {
        render(&self.pieces(text))
    }

    fn glyph_piece(&self, key: &str) -> Option<Piece<'d>> {
        self.dict.entry(key).map(|e| Piece::Glyph {
            key: &e.key,
            glyph: &e.glyph,
        })
    }
}

/// Concatenate pieces: glyphs back to back, literals followed by one space,
/// and no trailing space after a final literal.
pub fn render(pieces: &[Piece<'_>]) -> String {
    let mut out = String::new();
    for piece in pieces {
        match piece {
            Piece::Glyph { glyph, .. } => out.push_str(glyph),
            Piece::Literal(token) => {
                out.push_str(token);
                out.push(' ');
            }
        }
    }
    if pieces.last().is_some_and(Piece::is_literal) {
        out.pop();
    }
    out
}

/// Translate `text` against `dict`.
pub fn translate(dict: &Dictionary, text: &str) -> String {
    Translator::new(dict).translate(text)
}
