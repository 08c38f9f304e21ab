//! Semantic error-code catalogue.
//!
//! The validator knows five numbered semantic error classes. Their numbers double as reporting priority: the lowest
//! numbered non-empty class is the one shown to the user, every other class is suppressed for that run.
//!
//! ## Notes
//! - [`ERROR_CODES`] is ordered by priority; iterate it front to back when selecting the class to report.
//! - [`LineOrder`] records how a class's line numbers are presented: some classes are naturally collected in
//!   source order, the others are gathered in discovery order and must be sorted before printing.
//!
//! ## Examples
//! ```rust
//! use polycheck_core::lang::errors::{self, ErrorCodeId, LineOrder};
//!
//! assert_eq!(errors::code(ErrorCodeId::ArityMismatch), 4);
//! assert_eq!(errors::info_for(ErrorCodeId::ArityMismatch).line_order, LineOrder::Ascending);
//! assert_eq!(errors::info_for(ErrorCodeId::DuplicateDeclaration).title, "duplicate polynomial declaration");
//! ```

/// Stable identifier for every semantic error class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorCodeId {
    DuplicateDeclaration,
    InvalidMonomialVariable,
    UndeclaredPolynomial,
    ArityMismatch,
    UninitializedArgument,
}

/// How the recorded line numbers of a class are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineOrder {
    /// Printed exactly as collected.
    AsCollected,
    /// Sorted ascending before printing.
    Ascending,
}

/// Metadata for a semantic error class.
#[derive(Debug, Clone, Copy)]
pub struct ErrorCodeInfo {
    pub id: ErrorCodeId,
    /// Number printed in `Error Code <n>: ...`.
    pub code: u8,
    /// One-line name shown by `--explain`.
    pub title: &'static str,
    /// Longer explanation shown by `--explain` under the title.
    pub description: &'static str,
    pub line_order: LineOrder,
}

/// Registry of all semantic error classes, in reporting priority order.
pub const ERROR_CODES: &[ErrorCodeInfo] = &[
    ErrorCodeInfo {
        id: ErrorCodeId::DuplicateDeclaration,
        code: 1,
        title: "duplicate polynomial declaration",
        description: "A polynomial name is declared more than once; both the first and the repeated declaration lines \
                      are reported.",
        line_order: LineOrder::AsCollected,
    },
    ErrorCodeInfo {
        id: ErrorCodeId::InvalidMonomialVariable,
        code: 2,
        title: "invalid monomial variable",
        description: "A monomial names a variable that is not `x` (for a declaration without a parameter list) or \
                      not one of the declared parameters.",
        line_order: LineOrder::AsCollected,
    },
    ErrorCodeInfo {
        id: ErrorCodeId::UndeclaredPolynomial,
        code: 3,
        title: "evaluation of undeclared polynomial",
        description: "An evaluation names a polynomial that was never declared.",
        line_order: LineOrder::AsCollected,
    },
    ErrorCodeInfo {
        id: ErrorCodeId::ArityMismatch,
        code: 4,
        title: "wrong number of arguments",
        description: "An evaluation supplies a different number of arguments than the polynomial declares.",
        line_order: LineOrder::Ascending,
    },
    ErrorCodeInfo {
        id: ErrorCodeId::UninitializedArgument,
        code: 5,
        title: "uninitialized argument",
        description: "A variable is used as an argument before any INPUT statement initialized it.",
        line_order: LineOrder::Ascending,
    },
];

/// Return the full metadata entry for an error class.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: ErrorCodeId) -> &'static ErrorCodeInfo {
    ERROR_CODES
        .iter()
        .find(|e| e.id == id)
        .expect("INVARIANT: every ErrorCodeId has a registry entry")
}

/// Return the printed number of an error class.
pub fn code(id: ErrorCodeId) -> u8 {
    info_for(id).code
}

/// Iterate error classes from highest to lowest reporting priority.
pub fn by_priority() -> impl Iterator<Item = ErrorCodeId> {
    ERROR_CODES.iter().map(|e| e.id)
}
