//! Variable naming.

use alloc::{format, string::String};

use shader_ir::{Variable, VariableCategory};

/// One level of indentation.
pub(crate) const INDENT: &str = "\t";

pub(crate) fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// Synthesized GLSL name for a variable.
///
/// Uniforms, attributes and varyings are `U{i}`, `A{i}`, `V{i}`; locals
/// (parameters, block locals and loop counters) are `l{i}`.
pub fn variable_name(variable: Variable) -> String {
    let prefix = match variable.category {
        VariableCategory::Uniform => 'U',
        VariableCategory::Attribute => 'A',
        VariableCategory::Varying => 'V',
        VariableCategory::Local => 'l',
    };
    format!("{}{}", prefix, variable.index)
}

/// Running local index counter for one function.
///
/// Parameters, block locals and loop counters all draw from the same
/// counter, so names stay unique across nested scopes.
#[derive(Debug, Default)]
pub(crate) struct LocalCounter {
    next: usize,
}

impl LocalCounter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Take the next index.
    pub(crate) fn alloc(&mut self) -> usize {
        let index = self.next;
        self.next += 1;
        index
    }

    /// Number of indices taken so far.
    pub(crate) fn allocated(&self) -> usize {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_names() {
        assert_eq!(variable_name(Variable::uniform(0)), "U0");
        assert_eq!(variable_name(Variable::attribute(3)), "A3");
        assert_eq!(variable_name(Variable::varying(10)), "V10");
        assert_eq!(variable_name(Variable::local(2)), "l2");
    }

    #[test]
    fn test_local_counter() {
        let mut counter = LocalCounter::new();
        assert_eq!(counter.allocated(), 0);
        assert_eq!(counter.alloc(), 0);
        assert_eq!(counter.alloc(), 1);
        assert_eq!(counter.allocated(), 2);
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "\t\t");
    }
}
