/// Statement section parsing.
///
/// This chunk recognizes everything from `START` to the trailing input numbers: input statements, evaluation
/// statements, and (possibly nested) evaluation argument lists.
impl<'e, E: ParseEvents + ?Sized> Parser<'e, E> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// `start := START stmt+`
    fn start(&mut self) -> Result<(), SyntaxError> {
        self.expect_keyword(KeywordId::Start)?;
        self.statement_list()
    }

    /// `stmt+`, continuing while the next token can begin a statement.
    fn statement_list(&mut self) -> Result<(), SyntaxError> {
        self.statement()?;
        while self.check_keyword(KeywordId::Input) || self.check(TokenKind::Ident) {
            self.statement()?;
        }
        Ok(())
    }

    /// `stmt := INPUT ID SEMICOLON | poly_eval SEMICOLON`
    fn statement(&mut self) -> Result<(), SyntaxError> {
        if self.check_keyword(KeywordId::Input) {
            self.input_statement()
        } else if self.check(TokenKind::Ident) {
            self.poly_evaluation_statement()
        } else {
            Err(self.unexpected(&[TokenKind::Keyword(KeywordId::Input), TokenKind::Ident]))
        }
    }

    fn input_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect_keyword(KeywordId::Input)?;
        let variable = self.expect(TokenKind::Ident)?;
        self.expect_punct(PunctuationId::Semicolon)?;
        self.events.input_statement(&variable);
        Ok(())
    }

    fn poly_evaluation_statement(&mut self) -> Result<(), SyntaxError> {
        self.poly_evaluation()?;
        self.expect_punct(PunctuationId::Semicolon)?;
        Ok(())
    }

    /// `poly_eval := ID LPAREN arg (COMMA arg)* RPAREN`
    ///
    /// Returns the name token so a caller parsing a nested argument can report it.
    fn poly_evaluation(&mut self) -> Result<Token, SyntaxError> {
        if self.depth >= MAX_NESTING_DEPTH {
            let err = SyntaxError::nesting_too_deep(self.stream.peek(1), MAX_NESTING_DEPTH);
            tracing::debug!(limit = MAX_NESTING_DEPTH, line = err.line, "evaluation nesting limit reached");
            return Err(err);
        }
        self.depth += 1;
        let result = self.evaluation();
        self.depth -= 1;
        result
    }

    fn evaluation(&mut self) -> Result<Token, SyntaxError> {
        let name = self.polynomial_name(NameContext::Evaluation)?;
        self.expect_punct(PunctuationId::LParen)?;
        self.argument_list()?;
        self.expect_punct(PunctuationId::RParen)?;
        self.events.evaluation_finished(&name);
        Ok(name)
    }

    fn argument_list(&mut self) -> Result<(), SyntaxError> {
        self.argument()?;
        while self.check_punct(PunctuationId::Comma) {
            self.expect_punct(PunctuationId::Comma)?;
            self.argument()?;
        }
        Ok(())
    }

    /// `arg := poly_eval | ID | NUM`
    ///
    /// An `ID` followed by `LPAREN` starts a nested evaluation.
    fn argument(&mut self) -> Result<(), SyntaxError> {
        if self.check(TokenKind::Ident) && self.check_at(2, TokenKind::Punctuation(PunctuationId::LParen)) {
            let name = self.poly_evaluation()?;
            self.events.argument(Argument::Evaluation(&name));
            return Ok(());
        }

        let token = self.expect_one_of(&[TokenKind::Ident, TokenKind::Num])?;
        match token.kind {
            TokenKind::Ident => self.events.argument(Argument::Variable(&token)),
            _ => self.events.argument(Argument::Literal(&token)),
        }
        Ok(())
    }

    /// `inputs := NUM+`
    fn inputs(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Num)?;
        while self.check(TokenKind::Num) {
            self.expect(TokenKind::Num)?;
        }
        Ok(())
    }
}
