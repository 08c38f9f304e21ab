//! Collected semantic diagnostics.
//!
//! One line-number collection per semantic error class. Collections only grow during a run.

use std::collections::BTreeSet;

use polycheck_core::lang::errors::{self, ErrorCodeId};

/// Line numbers recorded for each of the five semantic error classes.
///
/// ## Notes
/// - Duplicate declarations are kept as an ordered set: every involved declaration line appears once, ascending.
/// - The other classes keep every occurrence in discovery order, so a line can repeat.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiagnosticSet {
    duplicate_declarations: BTreeSet<usize>,
    invalid_monomials: Vec<usize>,
    undeclared_polynomials: Vec<usize>,
    arity_mismatches: Vec<usize>,
    uninitialized_arguments: Vec<usize>,
}

impl DiagnosticSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `line` under `code`.
    pub fn record(&mut self, code: ErrorCodeId, line: usize) {
        tracing::trace!(code = errors::code(code), line, "semantic diagnostic");
        match code {
            ErrorCodeId::DuplicateDeclaration => {
                self.duplicate_declarations.insert(line);
            }
            ErrorCodeId::InvalidMonomialVariable => self.invalid_monomials.push(line),
            ErrorCodeId::UndeclaredPolynomial => self.undeclared_polynomials.push(line),
            ErrorCodeId::ArityMismatch => self.arity_mismatches.push(line),
            ErrorCodeId::UninitializedArgument => self.uninitialized_arguments.push(line),
        }
    }

    /// Lines recorded under `code`, in collection order.
    pub fn lines(&self, code: ErrorCodeId) -> Vec<usize> {
        match code {
            ErrorCodeId::DuplicateDeclaration => self.duplicate_declarations.iter().copied().collect(),
            ErrorCodeId::InvalidMonomialVariable => self.invalid_monomials.clone(),
            ErrorCodeId::UndeclaredPolynomial => self.undeclared_polynomials.clone(),
            ErrorCodeId::ArityMismatch => self.arity_mismatches.clone(),
            ErrorCodeId::UninitializedArgument => self.uninitialized_arguments.clone(),
        }
    }

    /// Number of lines recorded under `code`.
    pub fn count(&self, code: ErrorCodeId) -> usize {
        match code {
            ErrorCodeId::DuplicateDeclaration => self.duplicate_declarations.len(),
            ErrorCodeId::InvalidMonomialVariable => self.invalid_monomials.len(),
            ErrorCodeId::UndeclaredPolynomial => self.undeclared_polynomials.len(),
            ErrorCodeId::ArityMismatch => self.arity_mismatches.len(),
            ErrorCodeId::UninitializedArgument => self.uninitialized_arguments.len(),
        }
    }

    pub fn has(&self, code: ErrorCodeId) -> bool {
        self.count(code) > 0
    }

    /// `true` when no class has any recorded line.
    pub fn is_clean(&self) -> bool {
        !errors::by_priority().any(|code| self.has(code))
    }
}
