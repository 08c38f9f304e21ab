/// Recognize a token stream, reporting every construct to `events`.
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `polycheck_syntax::lexer`.
/// - `events`: Semantic receiver; pass `&mut ()` to check syntax only.
///
/// ## Errors
/// Returns the first [`SyntaxError`]. Events already delivered to `events` must then be discarded.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse<E: ParseEvents + ?Sized>(tokens: &[Token], events: &mut E) -> Result<(), SyntaxError> {
    let result = Parser::new(TokenStream::new(tokens.to_vec()), events).parse();
    if let Err(err) = &result {
        tracing::debug!(line = err.line, reason = ?err.reason, %err, "syntax error");
    }
    result
}

/// Recognize a token stream without any semantic checks.
pub fn check_syntax(tokens: &[Token]) -> Result<(), SyntaxError> {
    parse(tokens, &mut ())
}
