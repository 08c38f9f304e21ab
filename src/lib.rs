#![forbid(unsafe_code)]
//! Syntax and semantic validator for a small polynomial declaration language.
//!
//! A program declares named polynomials, then evaluates them on numbers, input variables, or nested evaluations:
//!
//! ```text
//! POLY F(a, b) = 3a^2 b - b;
//! POLY G = x^2 + 1;
//! START
//! INPUT y;
//! F(G(y), 2);
//! 1 2 3
//! ```
//!
//! The crate checks the grammar and five semantic rules, then reports the most important class of error found.
//! The lexer and grammar engine live in `polycheck_syntax`; this crate adds the semantic analyzer, the reporter, and
//! the command-line driver.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a validator bug (logic error), use `.expect("INVARIANT: reason")` with
//!   a clear explanation.
//!
//! ## Examples
//!
//! ```rust
//! let report = polycheck::validate("POLY P(a, b) = a + b;\nSTART\nP(1);\n1").unwrap();
//! assert_eq!(report.to_string(), "Error Code 4: 3");
//! ```

pub mod cli;
pub mod frontend;

pub use frontend::analyzer;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::report;

pub use frontend::analyzer::{Analyzer, DiagnosticSet};
pub use frontend::report::Report;
pub use frontend::validate;
