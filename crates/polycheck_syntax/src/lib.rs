//! Shared syntax frontend for the polynomial language: lexer, token stream, grammar engine, syntax diagnostics.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: the grammar engine reports what it recognizes through the
//!   [`parser::ParseEvents`] trait and keeps no declaration or scope tables of its own.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `polycheck_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use polycheck_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("POLY F = x^2 + 1; START F(4); 1");
//! assert!(parser::check_syntax(&tokens).is_ok());
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod parser;
