//! Operator vocabulary.
//!
//! The polynomial language has four operators: `=` binds a header to its body, `+`/`-` join terms, and `^` raises a
//! monomial to a numeric exponent.
//!
//! ## Examples
//! ```rust
//! use polycheck_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_char('^'), Some(OperatorId::Power));
//! assert!(operators::info_for(OperatorId::Minus).is_additive);
//! ```

/// Stable identifier for operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    Equal,
    Plus,
    Minus,
    Power,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    /// Token name used in diagnostics (`EQUAL`, `PLUS`, ...).
    pub terminal: &'static str,
    /// `true` for operators that may join two terms of a body.
    pub is_additive: bool,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    OperatorInfo {
        id: OperatorId::Equal,
        spelling: "=",
        terminal: "EQUAL",
        is_additive: false,
    },
    OperatorInfo {
        id: OperatorId::Plus,
        spelling: "+",
        terminal: "PLUS",
        is_additive: true,
    },
    OperatorInfo {
        id: OperatorId::Minus,
        spelling: "-",
        terminal: "MINUS",
        is_additive: true,
    },
    OperatorInfo {
        id: OperatorId::Power,
        spelling: "^",
        terminal: "POWER",
        is_additive: false,
    },
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: every OperatorId has a registry entry")
}

/// Resolve a single source character to an operator.
pub fn from_char(c: char) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| o.spelling.chars().eq(std::iter::once(c)))
        .map(|o| o.id)
}
