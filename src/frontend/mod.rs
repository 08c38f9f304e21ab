//! Polycheck frontend
//!
//! This module contains all frontend components:
//! - `lexer`: tokenization of program text
//! - `parser`: recognition of the grammar, delivering semantic events
//! - `diagnostics`: the fatal syntax error
//! - `analyzer`: the five semantic checks
//! - `report`: selection and formatting of the single report line

// Syntax components are provided by the shared polycheck_syntax crate.
pub use polycheck_syntax::{diagnostics, lexer, parser};

// Semantic pieces remain local.
pub mod analyzer;
pub mod report;

use diagnostics::SyntaxError;
use report::Report;

/// Lex, parse and analyze `source`, producing the report to print.
///
/// ## Errors
/// Returns the first [`SyntaxError`]; semantic diagnostics are never reported for such a program.
pub fn validate(source: &str) -> Result<Report, SyntaxError> {
    let tokens = lexer::lex(source);
    let diagnostics = analyzer::check(&tokens)?;
    Ok(Report::from_diagnostics(&diagnostics))
}
