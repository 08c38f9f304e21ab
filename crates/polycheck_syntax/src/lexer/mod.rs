//! Lexer for the polynomial language
//!
//! Handles tokenization including:
//! - Keywords (`POLY`, `START`, `INPUT` and their lower-case aliases)
//! - Identifiers and numeric literals
//! - Operators (`=`, `+`, `-`, `^`) and punctuation (`(`, `)`, `,`, `;`)
//! - Line tracking for diagnostics
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, Span)
//! - `stream` - Bounded-lookahead token stream consumed by the grammar engine
//!
//! ## Notes
//!
//! Lexing never fails. A character outside the language becomes a [`TokenKind::Error`] token; the grammar engine
//! rejects it like any other unexpected token, so the whole run still ends with a single syntax error.

pub mod stream;
pub mod tokens;

pub use stream::{StreamError, TokenStream};
pub use tokens::{Span, Token, TokenKind, keyword_id};

use polycheck_core::lang::operators;
use polycheck_core::lang::punctuation;

/// Lexer for polynomial source code.
///
/// Converts source text into a vector of tokens terminated by exactly one `Eof` token.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.line, self.current_pos));
        self.tokens
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '\n' => self.line += 1,
            ' ' | '\t' | '\r' => {}

            '0'..='9' => self.scan_number(start, c),
            _ if is_ident_start(c) => self.scan_identifier(start),

            _ => {
                if let Some(id) = operators::from_char(c) {
                    self.add_token(TokenKind::Operator(id), start);
                } else if let Some(id) = punctuation::from_char(c) {
                    self.add_token(TokenKind::Punctuation(id), start);
                } else {
                    tracing::trace!(line = self.line, character = %c, "unrecognized character");
                    self.add_token(TokenKind::Error, start);
                }
            }
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        let text = &self.source[start..self.current_pos];
        self.tokens
            .push(Token::new(kind, text, self.line, Span::new(start, self.current_pos)));
    }

    // ========================================================================
    // Literal and identifier scanning
    // ========================================================================

    /// Scan a `NUM`: either a lone `0` or a non-zero digit followed by digits.
    fn scan_number(&mut self, start: usize, first: char) {
        if first != '0' {
            while let Some(c) = self.peek() {
                if c.is_ascii_digit() {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.add_token(TokenKind::Num, start);
    }

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }
        let spelling = &self.source[start..self.current_pos];
        // Look up identifier spelling in the reserved-word registry.
        if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else {
            self.add_token(TokenKind::Ident, start);
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use polycheck_core::lang::keywords::{self, KeywordId};
    use polycheck_core::lang::operators::OperatorId;
    use polycheck_core::lang::punctuation::PunctuationId;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_keyword_registry_parity() {
        for k in keywords::KEYWORDS {
            for spelling in std::iter::once(&k.canonical).chain(k.aliases.iter()) {
                let tokens = lex(spelling);
                assert_eq!(tokens.len(), 2, "expected token + EOF for {:?}, got {:?}", spelling, tokens);
                assert_eq!(tokens[0].kind, TokenKind::Keyword(k.id));
                assert_eq!(tokens[1].kind, TokenKind::Eof);
            }
        }
    }

    #[test]
    fn test_operators_and_punctuation() {
        assert_eq!(
            kinds("=+-^(),;"),
            vec![
                TokenKind::Operator(OperatorId::Equal),
                TokenKind::Operator(OperatorId::Plus),
                TokenKind::Operator(OperatorId::Minus),
                TokenKind::Operator(OperatorId::Power),
                TokenKind::Punctuation(PunctuationId::LParen),
                TokenKind::Punctuation(PunctuationId::RParen),
                TokenKind::Punctuation(PunctuationId::Comma),
                TokenKind::Punctuation(PunctuationId::Semicolon),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_declaration_tokens_and_text() {
        let tokens = lex("POLY F(x, y2) = 3x^2 + y2;");
        let summary: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
        assert_eq!(
            summary,
            vec![
                (TokenKind::Keyword(KeywordId::Poly), "POLY"),
                (TokenKind::Ident, "F"),
                (TokenKind::Punctuation(PunctuationId::LParen), "("),
                (TokenKind::Ident, "x"),
                (TokenKind::Punctuation(PunctuationId::Comma), ","),
                (TokenKind::Ident, "y2"),
                (TokenKind::Punctuation(PunctuationId::RParen), ")"),
                (TokenKind::Operator(OperatorId::Equal), "="),
                (TokenKind::Num, "3"),
                (TokenKind::Ident, "x"),
                (TokenKind::Operator(OperatorId::Power), "^"),
                (TokenKind::Num, "2"),
                (TokenKind::Operator(OperatorId::Plus), "+"),
                (TokenKind::Ident, "y2"),
                (TokenKind::Punctuation(PunctuationId::Semicolon), ";"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_leading_zero_splits_number() {
        let tokens = lex("012 0 100");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["0", "12", "0", "100", ""]);
        assert!(tokens[..4].iter().all(|t| t.kind == TokenKind::Num));
    }

    #[test]
    fn test_mixed_case_keyword_is_identifier() {
        assert_eq!(kinds("Poly poly"), vec![
            TokenKind::Ident,
            TokenKind::Keyword(KeywordId::Poly),
            TokenKind::Eof
        ]);
    }

    #[test]
    fn test_line_numbers() {
        let tokens = lex("poly\n\nP\r\n  = x;");
        let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 3, 4, 4, 4, 4]);
    }

    #[test]
    fn test_unrecognized_characters_become_error_tokens() {
        let tokens = lex("x_1 * y");
        let summary: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
        assert_eq!(
            summary,
            vec![
                (TokenKind::Ident, "x"),
                (TokenKind::Error, "_"),
                (TokenKind::Num, "1"),
                (TokenKind::Error, "*"),
                (TokenKind::Ident, "y"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_empty_source_is_single_eof() {
        let tokens = lex("");
        assert_eq!(tokens, vec![Token::eof(1, 0)]);
    }

    #[test]
    fn test_spans_cover_lexemes() {
        let source = "INPUT abc;";
        for token in lex(source) {
            assert_eq!(&source[token.span.start..token.span.end], token.text);
        }
    }
}
