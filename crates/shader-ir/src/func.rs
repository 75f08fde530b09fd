//! Functions.

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::{
    block::{write_indent, Block},
    types::Type,
};

/// Parameter passing direction.
///
/// The ordering matches the order parameters are declared in: all `in`,
/// then all `inout`, then all `out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamDirection {
    In,
    InOut,
    Out,
}

impl ParamDirection {
    /// The qualifier keyword, shared by GLSL and the IR text format.
    pub fn keyword(self) -> &'static str {
        match self {
            ParamDirection::In => "in",
            ParamDirection::InOut => "inout",
            ParamDirection::Out => "out",
        }
    }
}

/// A function returning void.
///
/// Parameters take local indices `0..param_count()` in the order returned by
/// [`Func::params`]; the body's locals continue from there.
#[derive(Debug, Clone, PartialEq)]
pub struct Func {
    pub name: String,
    pub in_params: Vec<Type>,
    pub inout_params: Vec<Type>,
    pub out_params: Vec<Type>,
    pub body: Block,
}

impl Func {
    /// Create a function with no parameters and an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            in_params: Vec::new(),
            inout_params: Vec::new(),
            out_params: Vec::new(),
            body: Block::empty(),
        }
    }

    pub fn with_in(mut self, params: Vec<Type>) -> Self {
        self.in_params = params;
        self
    }

    pub fn with_inout(mut self, params: Vec<Type>) -> Self {
        self.inout_params = params;
        self
    }

    pub fn with_out(mut self, params: Vec<Type>) -> Self {
        self.out_params = params;
        self
    }

    pub fn with_body(mut self, body: Block) -> Self {
        self.body = body;
        self
    }

    /// Iterate over all parameters in declaration order.
    pub fn params(&self) -> impl Iterator<Item = (ParamDirection, &Type)> + '_ {
        let ins = self.in_params.iter().map(|ty| (ParamDirection::In, ty));
        let inouts = self.inout_params.iter().map(|ty| (ParamDirection::InOut, ty));
        let outs = self.out_params.iter().map(|ty| (ParamDirection::Out, ty));
        ins.chain(inouts).chain(outs)
    }

    /// Get the total number of parameters.
    pub fn param_count(&self) -> usize {
        self.in_params.len() + self.inout_params.len() + self.out_params.len()
    }

    /// Get the total number of local indices used by this function.
    pub fn local_count(&self) -> usize {
        self.param_count() + self.body.local_count()
    }

    pub(crate) fn write(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write_indent(f, depth)?;
        write!(f, "func @{}(", self.name)?;
        for (i, (direction, ty)) in self.params().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} {}", direction.keyword(), ty)?;
        }
        writeln!(f, ") {{")?;
        self.body.write_body(f, depth + 1)?;
        write_indent(f, depth)?;
        writeln!(f, "}}")
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, 0)
    }
}
