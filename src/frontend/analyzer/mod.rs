//! Semantic analyzer for polynomial programs.
//!
//! Runs the five semantic checks while the parser recognizes the token stream. The analyzer implements
//! [`ParseEvents`], so there is a single pass and no intermediate tree: each event updates the tables in
//! [`tables`] and may record a line in the [`DiagnosticSet`].
//!
//! ## Notes
//!
//! - **Error accumulation**: semantic errors never stop the run. A syntax error does, and everything collected up to
//!   that point is discarded.
//! - **Positional initialization**: an `INPUT` statement only initializes a variable for statements after it.
//! - **First declaration wins**: a duplicate name is reported but never replaces the first declaration's parameter
//!   count.
//!
//! ## Examples
//!
//! ```rust
//! use polycheck::frontend::{analyzer, lexer};
//! use polycheck_core::lang::errors::ErrorCodeId;
//!
//! let tokens = lexer::lex("POLY F = y;\nSTART F(1);\n1");
//! let diagnostics = analyzer::check(&tokens).unwrap();
//! assert_eq!(diagnostics.lines(ErrorCodeId::InvalidMonomialVariable), vec![1]);
//! ```

mod diagnostic_set;
pub mod tables;

use std::collections::{HashMap, HashSet};

use polycheck_core::lang::errors::ErrorCodeId;
use polycheck_syntax::diagnostics::SyntaxError;
use polycheck_syntax::lexer::Token;
use polycheck_syntax::parser::{self, Argument, ParseEvents};

pub use diagnostic_set::DiagnosticSet;
use tables::{DeclaredPolynomial, OpenDeclaration, ParameterScope};

/// The only variable a univariate polynomial body may use.
pub const UNIVARIATE_VARIABLE: &str = "x";

/// Semantic state for one program.
///
/// Create one per input; tables are never shared between runs.
#[derive(Debug, Default)]
pub struct Analyzer {
    declarations: Vec<DeclaredPolynomial>,
    /// Name to position in `declarations`.
    declared_index: HashMap<String, usize>,
    open_declaration: Option<OpenDeclaration>,
    scope: ParameterScope,
    initialized: HashSet<String>,
    argument_counts: Vec<usize>,
    diagnostics: DiagnosticSet,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `tokens`, running every semantic check along the way.
    ///
    /// ## Errors
    /// Returns the first [`SyntaxError`]. The analyzer's tables then reflect a partial program and should be
    /// dropped.
    pub fn analyze(&mut self, tokens: &[Token]) -> Result<(), SyntaxError> {
        parser::parse(tokens, self)
    }

    /// Polynomials in declaration order, one entry per distinct name.
    pub fn declarations(&self) -> &[DeclaredPolynomial] {
        &self.declarations
    }

    /// The first declaration of `name`, if any.
    pub fn declaration(&self, name: &str) -> Option<&DeclaredPolynomial> {
        self.declared_index.get(name).and_then(|&index| self.declarations.get(index))
    }

    /// Parameters of the declaration being parsed; empty between declarations.
    pub fn scope(&self) -> &ParameterScope {
        &self.scope
    }

    pub fn is_initialized(&self, variable: &str) -> bool {
        self.initialized.contains(variable)
    }

    pub fn diagnostics(&self) -> &DiagnosticSet {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> DiagnosticSet {
        self.diagnostics
    }

    fn record(&mut self, code: ErrorCodeId, line: usize) {
        self.diagnostics.record(code, line);
    }
}

impl ParseEvents for Analyzer {
    fn polynomial_declared(&mut self, name: &Token) {
        self.scope.clear();
        if let Some(first_line) = self.declaration(&name.text).map(|decl| decl.declared_line) {
            tracing::debug!(name = %name.text, first_line, line = name.line, "duplicate declaration");
            self.record(ErrorCodeId::DuplicateDeclaration, first_line);
            self.record(ErrorCodeId::DuplicateDeclaration, name.line);
            self.open_declaration = Some(OpenDeclaration {
                index: None,
                univariate: false,
            });
            return;
        }

        let index = self.declarations.len();
        self.declared_index.insert(name.text.clone(), index);
        self.declarations.push(DeclaredPolynomial::new(name.text.clone(), name.line));
        self.open_declaration = Some(OpenDeclaration {
            index: Some(index),
            univariate: false,
        });
    }

    fn parameter_declared(&mut self, parameter: &Token) {
        self.scope.insert(&parameter.text);
        let index = self.open_declaration.and_then(|open| open.index);
        if let Some(decl) = index.and_then(|index| self.declarations.get_mut(index)) {
            decl.parameter_count += 1;
        }
    }

    fn header_finished(&mut self, has_parameter_list: bool) {
        let Some(open) = self.open_declaration.as_mut() else {
            return;
        };
        open.univariate = !has_parameter_list;
        if !open.univariate {
            return;
        }
        if let Some(decl) = open.index.and_then(|index| self.declarations.get_mut(index)) {
            decl.parameter_count = 1;
        }
    }

    fn monomial(&mut self, variable: &Token) {
        let univariate = self.open_declaration.is_some_and(|open| open.univariate);
        let valid = if univariate {
            variable.text == UNIVARIATE_VARIABLE
        } else {
            self.scope.contains(&variable.text)
        };
        if !valid {
            self.record(ErrorCodeId::InvalidMonomialVariable, variable.line);
        }
    }

    fn declaration_finished(&mut self) {
        self.scope.clear();
        self.open_declaration = None;
    }

    fn input_statement(&mut self, variable: &Token) {
        self.initialized.insert(variable.text.clone());
    }

    fn evaluation_started(&mut self, name: &Token) {
        if !self.declared_index.contains_key(&name.text) {
            self.record(ErrorCodeId::UndeclaredPolynomial, name.line);
        }
        self.argument_counts.push(0);
    }

    fn argument(&mut self, argument: Argument<'_>) {
        if let Some(count) = self.argument_counts.last_mut() {
            *count += 1;
        }
        if let Argument::Variable(variable) = argument {
            if !self.initialized.contains(&variable.text) {
                self.record(ErrorCodeId::UninitializedArgument, variable.line);
            }
        }
    }

    fn evaluation_finished(&mut self, name: &Token) {
        let supplied = self.argument_counts.pop().unwrap_or_default();
        let expected = self.declaration(&name.text).map(|decl| decl.parameter_count);
        match expected {
            Some(expected) if expected != supplied => {
                tracing::debug!(name = %name.text, expected, supplied, line = name.line, "arity mismatch");
                self.record(ErrorCodeId::ArityMismatch, name.line);
            }
            _ => {}
        }
    }
}

/// Run the parser and all semantic checks over `tokens`.
///
/// ## Errors
/// Returns the first [`SyntaxError`]; no semantic diagnostics are reported for a program with a syntax error.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn check(tokens: &[Token]) -> Result<DiagnosticSet, SyntaxError> {
    let mut analyzer = Analyzer::new();
    analyzer.analyze(tokens)?;
    let diagnostics = analyzer.into_diagnostics();
    tracing::debug!(clean = diagnostics.is_clean(), "semantic analysis finished");
    Ok(diagnostics)
}
