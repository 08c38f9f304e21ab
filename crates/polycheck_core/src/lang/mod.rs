//! Polynomial language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, operators, punctuation, and the
//! numbered semantic error classes.
//!
//! The design goal is to avoid stringly-typed checks scattered across the lexer/parser/reporter. Instead, callers work
//! with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no token types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics, debug
//!   dumps, reports).
//!
//! ## Examples
//! ```rust
//! use polycheck_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("POLY"), Some(KeywordId::Poly));
//! assert_eq!(keywords::as_str(KeywordId::Start), "START");
//! ```

pub mod errors;
pub mod keywords;
pub mod operators;
pub mod punctuation;
