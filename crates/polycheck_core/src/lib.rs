//! Provide the canonical language vocabulary shared by the polycheck lexer, grammar engine and reporter.
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global state, and no frontend-specific types.
//! - Current scope: reserved keywords, operators, punctuation, and the semantic error-code catalogue.

pub mod lang;
