/// Semantic hook points of the grammar engine.
///
/// This chunk defines [`ParseEvents`], the seam between syntax and semantics. The parser calls one method per
/// recognized construct, in source order; an implementation keeps whatever tables it needs.
///
/// ## Notes
/// - Every method has an empty default body, so an implementation only overrides what it checks.
/// - `()` implements the trait with all defaults; that is the syntax-only mode used by [`check_syntax`].
/// - Events are only delivered for constructs recognized so far. Once a [`SyntaxError`] is raised no further events
///   arrive, and the caller must discard any partial state.
pub trait ParseEvents {
    /// A polynomial header name was recognized (`POLY <name> ...`).
    fn polynomial_declared(&mut self, _name: &Token) {}

    /// One identifier of a header's parameter list.
    fn parameter_declared(&mut self, _parameter: &Token) {}

    /// The header is complete; `has_parameter_list` is `false` for the implicit single-variable form.
    fn header_finished(&mut self, _has_parameter_list: bool) {}

    /// The variable of one monomial in a declaration body.
    fn monomial(&mut self, _variable: &Token) {}

    /// The declaration's closing `;` was consumed.
    fn declaration_finished(&mut self) {}

    /// An `INPUT <variable>;` statement.
    fn input_statement(&mut self, _variable: &Token) {}

    /// An evaluation's polynomial name, before its argument list is parsed.
    fn evaluation_started(&mut self, _name: &Token) {}

    /// One complete argument of the innermost open evaluation.
    fn argument(&mut self, _argument: Argument<'_>) {}

    /// The evaluation's closing `)` was consumed.
    fn evaluation_finished(&mut self, _name: &Token) {}
}

impl ParseEvents for () {}

/// An evaluation argument, as reported by [`ParseEvents::argument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument<'t> {
    /// A numeric literal.
    Literal(&'t Token),
    /// A bare variable.
    Variable(&'t Token),
    /// A nested evaluation, identified by its polynomial name. Reported after the nested evaluation finished.
    Evaluation(&'t Token),
}

impl<'t> Argument<'t> {
    /// Token that introduced this argument.
    pub fn token(&self) -> &'t Token {
        match self {
            Argument::Literal(t) | Argument::Variable(t) | Argument::Evaluation(t) => t,
        }
    }
}
