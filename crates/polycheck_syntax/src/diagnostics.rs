//! Syntax-tier diagnostics.
//!
//! A syntax error is fatal: the grammar engine stops at the first unexpected token and the error propagates to the
//! driver with `?`. No recovery is attempted and no semantic diagnostics are produced for that run.
//!
//! [`SyntaxError`] carries enough context (expected terminals, offending token, line, span) for a rich `miette`
//! rendering, while the user-facing output of the validator stays the fixed [`SYNTAX_ERROR_MESSAGE`].
//!
//! ## Reasons
//! - [`SyntaxErrorReason::UnexpectedToken`]: the grammar could not continue with the next token.
//! - [`SyntaxErrorReason::NestingTooDeep`]: evaluations were nested deeper than
//!   [`MAX_NESTING_DEPTH`](crate::parser::MAX_NESTING_DEPTH).

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::lexer::{Token, TokenKind};

/// Fixed message printed by the validator when the program is syntactically invalid.
pub const SYNTAX_ERROR_MESSAGE: &str = "SYNTAX ERROR !&%!";

/// Why the parser gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorReason {
    /// The token did not fit the grammar at this point.
    UnexpectedToken,
    /// The token would open evaluation number `limit + 1` inside one statement.
    NestingTooDeep { limit: usize },
}

/// The first syntax error of a program.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{} on line {line}", summary(.reason, .expected, .found))]
#[diagnostic(
    code(polycheck::syntax),
    help("a program is one or more POLY declarations, then START with at least one statement, then the input numbers")
)]
pub struct SyntaxError {
    pub reason: SyntaxErrorReason,
    /// Human-readable list of acceptable terminals (`ID or NUM`).
    pub expected: String,
    /// Description of the offending token (`SEMICOLON `;``).
    pub found: String,
    /// Kind of the offending token.
    pub kind: TokenKind,
    /// 1-based line of the offending token.
    pub line: usize,
    #[label("parsing stopped here")]
    pub span: SourceSpan,
}

impl SyntaxError {
    /// Build an error for `found` when one of `expected` was required.
    pub fn unexpected(expected: &[TokenKind], found: &Token) -> Self {
        Self {
            reason: SyntaxErrorReason::UnexpectedToken,
            expected: describe_expected(expected),
            found: found.to_string(),
            kind: found.kind,
            line: found.line,
            span: found.span.into(),
        }
    }

    /// Build an error for the name token `found` that would open one evaluation too many.
    pub fn nesting_too_deep(found: &Token, limit: usize) -> Self {
        Self {
            reason: SyntaxErrorReason::NestingTooDeep { limit },
            expected: describe_expected(&[TokenKind::Ident, TokenKind::Num]),
            found: found.to_string(),
            kind: found.kind,
            line: found.line,
            span: found.span.into(),
        }
    }
}

fn summary(reason: &SyntaxErrorReason, expected: &str, found: &str) -> String {
    match reason {
        SyntaxErrorReason::UnexpectedToken => format!("expected {expected}, found {found}"),
        SyntaxErrorReason::NestingTooDeep { limit } => {
            format!("nesting too deep: {found} opens more than {limit} nested evaluations")
        }
    }
}

fn describe_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => only.to_string(),
        _ => {
            let names: Vec<&str> = expected.iter().map(|k| k.terminal_name()).collect();
            names.join(" or ")
        }
    }
}
