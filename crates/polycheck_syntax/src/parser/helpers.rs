/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Lookahead tests (`check`, `check_at`)
/// - Consuming with validation (`expect`, `expect_one_of`)
impl<'e, E: ParseEvents + ?Sized> Parser<'e, E> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the `k`-th lookahead token has the given kind.
    fn check_at(&self, k: usize, kind: TokenKind) -> bool {
        self.stream.peek(k).kind == kind
    }

    /// Return `true` if the next token has the given kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.check_at(1, kind)
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.check(TokenKind::Keyword(id))
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.check(TokenKind::Operator(id))
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.check(TokenKind::Punctuation(id))
    }

    /// Return `true` if the next token is an operator that joins two terms.
    fn check_additive(&self) -> bool {
        matches!(self.stream.peek(1).kind, TokenKind::Operator(id) if operators::info_for(id).is_additive)
    }

    /// Consume the next token and require it to be `kind`.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        self.expect_one_of(&[kind])
    }

    /// Consume the next token and require it to be one of `kinds`.
    fn expect_one_of(&mut self, kinds: &[TokenKind]) -> Result<Token, SyntaxError> {
        let token = self.stream.next();
        if kinds.contains(&token.kind) {
            Ok(token)
        } else {
            Err(SyntaxError::unexpected(kinds, &token))
        }
    }

    fn expect_keyword(&mut self, id: KeywordId) -> Result<Token, SyntaxError> {
        self.expect(TokenKind::Keyword(id))
    }

    fn expect_op(&mut self, id: OperatorId) -> Result<Token, SyntaxError> {
        self.expect(TokenKind::Operator(id))
    }

    fn expect_punct(&mut self, id: PunctuationId) -> Result<Token, SyntaxError> {
        self.expect(TokenKind::Punctuation(id))
    }

    /// Error for the next token without consuming it.
    fn unexpected(&self, expected: &[TokenKind]) -> SyntaxError {
        SyntaxError::unexpected(expected, self.stream.peek(1))
    }
}
