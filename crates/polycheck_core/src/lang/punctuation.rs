//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the lexer/parser: the parameter
//! and argument delimiters, the list separator, and the statement terminator.
//!
//! ## Notes
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use polycheck_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_char(';'), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::info_for(PunctuationId::LParen).terminal, "LPAREN");
//! ```

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LParen,
    RParen,
    Comma,
    Semicolon,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: char,
    /// Token name used in diagnostics (`LPAREN`, `SEMICOLON`, ...).
    pub terminal: &'static str,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::LParen, '(', "LPAREN"),
    info(PunctuationId::RParen, ')', "RPAREN"),
    info(PunctuationId::Comma, ',', "COMMA"),
    info(PunctuationId::Semicolon, ';', "SEMICOLON"),
];

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("INVARIANT: every PunctuationId has a registry entry")
}

/// Resolve a punctuation character to its identifier.
pub fn from_char(c: char) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == c).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: char, terminal: &'static str) -> PunctuationInfo {
    PunctuationInfo { id, canonical, terminal }
}
