//! Bounded-lookahead token stream.
//!
//! [`TokenStream`] is the contract between the lexer and the grammar engine:
//! - [`TokenStream::next`] consumes and returns the next token,
//! - [`TokenStream::peek`] returns the k-th lookahead token (k >= 1) without consuming,
//! - [`TokenStream::pushback`] returns the last n consumed tokens to the front of the stream.
//!
//! ## Notes
//! - The stream is always terminated by an `Eof` token. Reading or peeking past the end keeps yielding that token, and
//!   consuming it does not advance the cursor (so it is never counted as consumed).

use thiserror::Error;

use super::tokens::{Token, TokenKind};

/// Errors raised by misuse of the stream contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    #[error("cannot push back {requested} token(s): only {consumed} consumed")]
    PushbackTooFar { requested: usize, consumed: usize },
}

/// Token stream with bounded lookahead and push-back.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    /// Create a stream over lexed tokens.
    ///
    /// An `Eof` token is appended if `tokens` does not already end with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof)) {
            let (line, offset) = tokens.last().map(|t| (t.line, t.span.end)).unwrap_or((1, 0));
            tokens.push(Token::eof(line, offset));
        }
        Self { tokens, pos: 0 }
    }

    /// Consume and return the next token.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Return the `k`-th lookahead token without consuming anything.
    ///
    /// ## Panics
    /// - If `k == 0`; lookahead is 1-based.
    pub fn peek(&self, k: usize) -> &Token {
        assert!(k >= 1, "peek lookahead is 1-based, got k = 0");
        let index = (self.pos + k - 1).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Return the last `n` consumed tokens to the front of the stream.
    ///
    /// ## Errors
    /// Returns [`StreamError::PushbackTooFar`] (and leaves the stream untouched) if fewer than `n` tokens were
    /// consumed.
    pub fn pushback(&mut self, n: usize) -> Result<(), StreamError> {
        if n > self.pos {
            return Err(StreamError::PushbackTooFar {
                requested: n,
                consumed: self.pos,
            });
        }
        self.pos -= n;
        Ok(())
    }

    /// Number of tokens consumed so far (excluding repeated reads of `Eof`).
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Return `true` once the next token is `Eof`.
    pub fn is_at_end(&self) -> bool {
        matches!(self.tokens[self.pos].kind, TokenKind::Eof)
    }
}
