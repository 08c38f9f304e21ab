//! Report selection and formatting.
//!
//! Only the highest-priority non-empty error class is ever shown. Its lines are printed on one line after the code:
//!
//! ```text
//! Error Code 4: 3 7 9
//! ```

use std::fmt;

use polycheck_core::lang::errors::{self, ErrorCodeId, ErrorCodeInfo, LineOrder};

use crate::frontend::analyzer::DiagnosticSet;

/// Outcome of a successfully parsed program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// No semantic diagnostics; nothing is printed.
    Clean,
    /// The first non-empty error class, in priority order.
    Errors { code: ErrorCodeId, lines: Vec<usize> },
}

impl Report {
    /// Select the class to report from `diagnostics`.
    ///
    /// Classes are inspected in priority order 1 through 5; all classes after the first non-empty one are suppressed.
    pub fn from_diagnostics(diagnostics: &DiagnosticSet) -> Self {
        let Some(code) = errors::by_priority().find(|&code| diagnostics.has(code)) else {
            return Report::Clean;
        };

        let mut lines = diagnostics.lines(code);
        if errors::info_for(code).line_order == LineOrder::Ascending {
            sort_ascending(&mut lines);
        }
        Report::Errors { code, lines }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, Report::Clean)
    }

    /// Numeric code of the reported class, if any.
    pub fn code(&self) -> Option<u8> {
        match self {
            Report::Clean => None,
            Report::Errors { code, .. } => Some(errors::code(*code)),
        }
    }

    /// Catalogue entry of the reported class, with the title and description shown by `--explain`.
    pub fn info(&self) -> Option<&'static ErrorCodeInfo> {
        match self {
            Report::Clean => None,
            Report::Errors { code, .. } => Some(errors::info_for(*code)),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Clean => Ok(()),
            Report::Errors { code, lines } => {
                write!(f, "Error Code {}:", errors::code(*code))?;
                for line in lines {
                    write!(f, " {line}")?;
                }
                Ok(())
            }
        }
    }
}

/// Sort line numbers in non-decreasing order, keeping duplicates.
fn sort_ascending(lines: &mut [usize]) {
    lines.sort_unstable();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_with(entries: &[(ErrorCodeId, usize)]) -> DiagnosticSet {
        let mut set = DiagnosticSet::new();
        for &(code, line) in entries {
            set.record(code, line);
        }
        set
    }

    #[test]
    fn test_clean_renders_nothing() {
        let report = Report::from_diagnostics(&DiagnosticSet::new());
        assert!(report.is_clean());
        assert_eq!(report.code(), None);
        assert!(report.info().is_none());
        assert_eq!(report.to_string(), "");
    }

    #[test]
    fn test_highest_priority_class_wins() {
        let set = set_with(&[
            (ErrorCodeId::UninitializedArgument, 9),
            (ErrorCodeId::InvalidMonomialVariable, 2),
            (ErrorCodeId::UndeclaredPolynomial, 5),
        ]);
        let report = Report::from_diagnostics(&set);
        assert_eq!(report, Report::Errors {
            code: ErrorCodeId::InvalidMonomialVariable,
            lines: vec![2],
        });
        insta::assert_snapshot!(report.to_string(), @"Error Code 2: 2");
    }

    #[test]
    fn test_arity_lines_sorted_ascending() {
        let set = set_with(&[
            (ErrorCodeId::ArityMismatch, 8),
            (ErrorCodeId::ArityMismatch, 3),
            (ErrorCodeId::ArityMismatch, 8),
            (ErrorCodeId::ArityMismatch, 1),
        ]);
        insta::assert_snapshot!(Report::from_diagnostics(&set).to_string(), @"Error Code 4: 1 3 8 8");
    }

    #[test]
    fn test_uninitialized_lines_sorted_ascending() {
        let set = set_with(&[(ErrorCodeId::UninitializedArgument, 6), (ErrorCodeId::UninitializedArgument, 2)]);
        insta::assert_snapshot!(Report::from_diagnostics(&set).to_string(), @"Error Code 5: 2 6");
    }

    #[test]
    fn test_invalid_monomial_lines_keep_discovery_order() {
        let set = set_with(&[
            (ErrorCodeId::InvalidMonomialVariable, 5),
            (ErrorCodeId::InvalidMonomialVariable, 2),
        ]);
        insta::assert_snapshot!(Report::from_diagnostics(&set).to_string(), @"Error Code 2: 5 2");
    }

    #[test]
    fn test_duplicate_declaration_report() {
        let set = set_with(&[(ErrorCodeId::DuplicateDeclaration, 4), (ErrorCodeId::DuplicateDeclaration, 1)]);
        let report = Report::from_diagnostics(&set);
        assert_eq!(report.code(), Some(1));
        assert_eq!(report.info().map(|info| info.title), Some("duplicate polynomial declaration"));
        insta::assert_snapshot!(report.to_string(), @"Error Code 1: 1 4");
    }
}
