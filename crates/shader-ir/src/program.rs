//! Programs.

use alloc::vec::Vec;
use core::fmt;

use crate::{block::write_indent, func::Func, types::Type};

/// The root of the IR: global declarations plus functions.
///
/// A program is built once by a front end and only read afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub uniforms: Vec<Type>,
    pub attributes: Vec<Type>,
    pub varyings: Vec<Type>,
    pub funcs: Vec<Func>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a uniform and return its index.
    pub fn add_uniform(&mut self, ty: Type) -> usize {
        self.uniforms.push(ty);
        self.uniforms.len() - 1
    }

    /// Declare an attribute and return its index.
    pub fn add_attribute(&mut self, ty: Type) -> usize {
        self.attributes.push(ty);
        self.attributes.len() - 1
    }

    /// Declare a varying and return its index.
    pub fn add_varying(&mut self, ty: Type) -> usize {
        self.varyings.push(ty);
        self.varyings.len() - 1
    }

    /// Add a function and return its index.
    pub fn add_func(&mut self, func: Func) -> usize {
        self.funcs.push(func);
        self.funcs.len() - 1
    }

    /// Get a function by name.
    pub fn func(&self, name: &str) -> Option<&Func> {
        self.funcs.iter().find(|func| func.name == name)
    }

    /// Check if the program declares nothing.
    pub fn is_empty(&self) -> bool {
        self.uniforms.is_empty()
            && self.attributes.is_empty()
            && self.varyings.is_empty()
            && self.funcs.is_empty()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "program {{")?;

        let globals = [
            ("uniform", &self.uniforms),
            ("attribute", &self.attributes),
            ("varying", &self.varyings),
        ];
        for (keyword, types) in globals {
            for ty in types {
                write_indent(f, 1)?;
                writeln!(f, "{} {}", keyword, ty)?;
            }
        }

        for func in &self.funcs {
            func.write(f, 1)?;
        }

        writeln!(f, "}}")
    }
}
