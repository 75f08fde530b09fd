//! Variable addressing.

use core::fmt;

/// Storage class of a variable. Each category has its own index domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariableCategory {
    Uniform,
    Attribute,
    Varying,
    /// Function parameters, block locals and loop counters
    Local,
}

impl VariableCategory {
    /// Prefix letter used by the text format (`%u0`, `%a0`, `%v0`, `%l0`).
    pub fn prefix(self) -> char {
        match self {
            VariableCategory::Uniform => 'u',
            VariableCategory::Attribute => 'a',
            VariableCategory::Varying => 'v',
            VariableCategory::Local => 'l',
        }
    }
}

/// A variable reference: a zero-based index within its category.
///
/// Uniform, attribute and varying indices are positions in the matching
/// [`Program`](crate::Program) list. Local indices count through one
/// function: parameters first, then block locals and loop counters in
/// pre-order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    pub category: VariableCategory,
    pub index: usize,
}

impl Variable {
    pub fn new(category: VariableCategory, index: usize) -> Self {
        Self { category, index }
    }

    pub fn uniform(index: usize) -> Self {
        Self::new(VariableCategory::Uniform, index)
    }

    pub fn attribute(index: usize) -> Self {
        Self::new(VariableCategory::Attribute, index)
    }

    pub fn varying(index: usize) -> Self {
        Self::new(VariableCategory::Varying, index)
    }

    pub fn local(index: usize) -> Self {
        Self::new(VariableCategory::Local, index)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}{}", self.category.prefix(), self.index)
    }
}
