//! Declaration and scope tables owned by one analysis run.

use std::collections::HashSet;

/// A polynomial as first declared.
///
/// ## Notes
/// - `parameter_count` is final once the declaration's header is complete. Later declarations of the same name do
///   not create a new entry and never touch this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredPolynomial {
    pub name: String,
    pub declared_line: usize,
    pub parameter_count: usize,
}

impl DeclaredPolynomial {
    pub fn new(name: impl Into<String>, declared_line: usize) -> Self {
        Self {
            name: name.into(),
            declared_line,
            parameter_count: 0,
        }
    }
}

/// Parameter names visible in the body currently being parsed.
///
/// Populated by a header's parameter list and cleared when the declaration completes, so it is empty between
/// declarations.
#[derive(Debug, Default, Clone)]
pub struct ParameterScope {
    names: HashSet<String>,
}

impl ParameterScope {
    pub fn insert(&mut self, name: &str) {
        self.names.insert(name.to_string());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Header state of the declaration being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenDeclaration {
    /// Index into the declaration list, or `None` for a duplicate that does not own an entry.
    pub(crate) index: Option<usize>,
    /// `true` once the header finished without a parameter list.
    pub(crate) univariate: bool,
}
