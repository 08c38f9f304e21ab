//! Token types for the polynomial lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for `=`, `+`, `-`, `^`
//! - `Punctuation(PunctuationId)` for `(`, `)`, `,`, `;`
//!
//! ## Notes
//! - Every kind is a plain `Copy` tag; the lexeme itself lives in [`Token::text`], so identifiers and numbers can be
//!   compared by kind without looking at their spelling.
//! - [`TokenKind`]'s `Display` prints the terminal name (`POLY`, `ID`, `END_OF_FILE`, ...) used in syntax errors.

use std::fmt;

use polycheck_core::lang::keywords::{self, KeywordId};
use polycheck_core::lang::operators::{self, OperatorId};
use polycheck_core::lang::punctuation::{self, PunctuationId};

/// Byte range of a token in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    Num,

    // ========== Special ==========
    /// A character outside the language; never accepted by the grammar.
    Error,
    /// End of input. Always the last token of a stream.
    Eof,
}

impl TokenKind {
    /// Terminal name of this kind, as used in the grammar.
    pub fn terminal_name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(id) => keywords::as_str(*id),
            TokenKind::Operator(id) => operators::info_for(*id).terminal,
            TokenKind::Punctuation(id) => punctuation::info_for(*id).terminal,
            TokenKind::Ident => "ID",
            TokenKind::Num => "NUM",
            TokenKind::Error => "ERROR",
            TokenKind::Eof => "END_OF_FILE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.terminal_name())
    }
}

/// A token with its kind, lexeme, 1-based source line and byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            span,
        }
    }

    /// Construct the end-of-input token for a given position.
    pub fn eof(line: usize, offset: usize) -> Self {
        Self::new(TokenKind::Eof, "", line, Span::new(offset, offset))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} `{}`", self.kind, self.text)
        }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
