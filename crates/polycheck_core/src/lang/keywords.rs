//! Define the reserved keyword vocabulary for the polynomial language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings and aliases.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**, except where explicit aliases are defined. The canonical
//!   spellings are upper-case (`POLY`); the lower-case forms are accepted aliases. Mixed case (`Poly`) is an
//!   identifier.
//! - This registry is intentionally **pure** (no tokens/IO/side effects).
//!
//! ## Examples
//! ```rust
//! use polycheck_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("input"), Some(KeywordId::Input)); // alias
//! assert_eq!(keywords::from_str("Input"), None);
//! assert_eq!(keywords::as_str(KeywordId::Input), "INPUT");
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    /// Introduces a polynomial declaration.
    Poly,
    /// Opens the statement section.
    Start,
    /// Introduces an input statement.
    Input,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `canonical` is the preferred spelling for docs and debug output.
/// - `aliases` are additional spellings accepted by the lexer.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Poly, "POLY", &["poly"]),
    info(KeywordId::Start, "START", &["start"]),
    info(KeywordId::Input, "INPUT", &["input"]),
];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a registry entry")
}

/// Lookup by spelling (canonical or alias).
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    if let Some(k) = KEYWORDS.iter().find(|k| k.canonical == s) {
        return Some(k.id);
    }
    KEYWORDS
        .iter()
        .find(|k| {
            let aliases: &[&str] = k.aliases;
            aliases.contains(&s)
        })
        .map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, aliases: &'static [&'static str]) -> KeywordInfo {
    KeywordInfo { id, canonical, aliases }
}
