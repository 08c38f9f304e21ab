/// Declaration section parsing.
///
/// This chunk recognizes `poly_decl_section` down to single monomials: headers with their optional parameter lists,
/// bodies as `+`/`-` separated terms, and coefficient/exponent literals.
impl<'e, E: ParseEvents + ?Sized> Parser<'e, E> {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// `program := poly_decl_section start`
    fn program(&mut self) -> Result<(), SyntaxError> {
        self.poly_decl_section()?;
        self.start()
    }

    /// `poly_decl_section := poly_decl+`
    fn poly_decl_section(&mut self) -> Result<(), SyntaxError> {
        self.poly_decl()?;
        while self.check_keyword(KeywordId::Poly) {
            self.poly_decl()?;
        }
        Ok(())
    }

    /// `poly_decl := POLY header EQUAL body SEMICOLON`
    fn poly_decl(&mut self) -> Result<(), SyntaxError> {
        self.expect_keyword(KeywordId::Poly)?;
        self.polynomial_header()?;
        self.expect_op(OperatorId::Equal)?;
        self.polynomial_body()?;
        self.expect_punct(PunctuationId::Semicolon)?;
        self.events.declaration_finished();
        Ok(())
    }

    /// `header := ID ( LPAREN id_list RPAREN )?`
    fn polynomial_header(&mut self) -> Result<(), SyntaxError> {
        self.polynomial_name(NameContext::Declaration)?;
        let has_parameter_list = self.check_punct(PunctuationId::LParen);
        if has_parameter_list {
            self.expect_punct(PunctuationId::LParen)?;
            self.id_list()?;
            self.expect_punct(PunctuationId::RParen)?;
        }
        self.events.header_finished(has_parameter_list);
        Ok(())
    }

    /// Recognize a polynomial name and announce it according to `context`.
    fn polynomial_name(&mut self, context: NameContext) -> Result<Token, SyntaxError> {
        let name = self.expect(TokenKind::Ident)?;
        match context {
            NameContext::Declaration => self.events.polynomial_declared(&name),
            NameContext::Evaluation => self.events.evaluation_started(&name),
        }
        Ok(name)
    }

    /// `id_list := ID (COMMA ID)*`
    fn id_list(&mut self) -> Result<(), SyntaxError> {
        let parameter = self.expect(TokenKind::Ident)?;
        self.events.parameter_declared(&parameter);
        while self.check_punct(PunctuationId::Comma) {
            self.expect_punct(PunctuationId::Comma)?;
            let parameter = self.expect(TokenKind::Ident)?;
            self.events.parameter_declared(&parameter);
        }
        Ok(())
    }

    /// `body := term (addop term)*`
    fn polynomial_body(&mut self) -> Result<(), SyntaxError> {
        self.term()?;
        while self.check_additive() {
            self.add_operator()?;
            self.term()?;
        }
        Ok(())
    }

    /// `term := monomial+ | NUM monomial*`
    ///
    /// A leading `NUM` is a coefficient; it is followed by monomials only when the next token is an `ID`.
    fn term(&mut self) -> Result<(), SyntaxError> {
        if self.check(TokenKind::Ident) {
            self.monomial_list()
        } else if self.check(TokenKind::Num) {
            self.coefficient()?;
            if self.check(TokenKind::Ident) {
                self.monomial_list()?;
            }
            Ok(())
        } else {
            Err(self.unexpected(&[TokenKind::Ident, TokenKind::Num]))
        }
    }

    /// `monomial+`
    fn monomial_list(&mut self) -> Result<(), SyntaxError> {
        self.monomial()?;
        while self.check(TokenKind::Ident) {
            self.monomial()?;
        }
        Ok(())
    }

    /// `monomial := ID (POWER NUM)?`
    fn monomial(&mut self) -> Result<(), SyntaxError> {
        let variable = self.expect(TokenKind::Ident)?;
        self.events.monomial(&variable);
        if self.check_op(OperatorId::Power) {
            self.exponent()?;
        }
        Ok(())
    }

    fn exponent(&mut self) -> Result<(), SyntaxError> {
        self.expect_op(OperatorId::Power)?;
        self.expect(TokenKind::Num)?;
        Ok(())
    }

    /// `addop := PLUS | MINUS`
    fn add_operator(&mut self) -> Result<(), SyntaxError> {
        self.expect_one_of(&[
            TokenKind::Operator(OperatorId::Plus),
            TokenKind::Operator(OperatorId::Minus),
        ])?;
        Ok(())
    }

    fn coefficient(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Num)?;
        Ok(())
    }
}
