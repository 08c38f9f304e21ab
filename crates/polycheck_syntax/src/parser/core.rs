// Parser core types and entrypoint.
//
// This chunk defines the [`Parser`] type, the [`NameContext`] threaded into name recognition, and
// `Parser::parse`, which recognizes one whole program.
//
// ## Notes
// - This file is `include!`'d into `crate::parser` to keep all parser methods in a single module while avoiding a
//   single “god file”.

/// Deepest accepted chain of evaluations nested as arguments, counting the statement's own evaluation.
///
/// Evaluations are parsed by recursion, so this bounds the parser's stack use. Opening one more evaluation fails with
/// [`NestingTooDeep`](crate::diagnostics::SyntaxErrorReason::NestingTooDeep).
pub const MAX_NESTING_DEPTH: usize = 256;

/// Where a polynomial name is being recognized.
///
/// Declaration names and evaluation names share the same production (`ID`), but mean different things to the
/// semantic layer. The caller states which one it is parsing instead of the name procedure looking back at the
/// previous token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameContext {
    /// Directly after `POLY`.
    Declaration,
    /// At the start of an evaluation statement or nested argument.
    Evaluation,
}

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and does not recover: every procedure returns `Result` and the first
///   [`SyntaxError`] unwinds the whole run through `?`.
/// - Semantic work is delegated to the `events` sink as constructs are recognized.
pub struct Parser<'e, E: ParseEvents + ?Sized> {
    stream: TokenStream,
    events: &'e mut E,
    /// Evaluations currently open.
    depth: usize,
}

impl<'e, E: ParseEvents + ?Sized> Parser<'e, E> {
    /// Create a new parser over a token stream.
    ///
    /// ## Parameters
    /// - `stream`: Token stream produced from `polycheck_syntax::lexer`.
    /// - `events`: Receiver of semantic events.
    pub fn new(stream: TokenStream, events: &'e mut E) -> Self {
        Self {
            stream,
            events,
            depth: 0,
        }
    }

    /// Recognize a complete program.
    ///
    /// ## Errors
    /// Returns the first [`SyntaxError`]; the events delivered before it describe an incomplete program.
    pub fn parse(mut self) -> Result<(), SyntaxError> {
        self.program()?;
        self.inputs()?;
        self.expect(TokenKind::Eof)?;
        Ok(())
    }
}
