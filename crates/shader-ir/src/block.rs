//! Blocks.

use alloc::vec::Vec;
use core::fmt;

use crate::{stmt::Stmt, types::Type};

/// A lexical scope: local variable declarations followed by statements.
///
/// Locals are named by the enclosing function's running local counter, so a
/// block never restarts numbering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// Types of the locals declared in this block, in order.
    pub locals: Vec<Type>,
    /// Statements in this block.
    pub stmts: Vec<Stmt>,
}

impl Block {
    /// Create a block from its locals and statements.
    pub fn new(locals: Vec<Type>, stmts: Vec<Stmt>) -> Self {
        Self { locals, stmts }
    }

    /// Create a block with no locals and no statements.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a local declaration.
    pub fn push_local(&mut self, ty: Type) {
        self.locals.push(ty);
    }

    /// Add a statement.
    pub fn push_stmt(&mut self, stmt: Stmt) {
        self.stmts.push(stmt);
    }

    /// Check if the block declares nothing and does nothing.
    pub fn is_empty(&self) -> bool {
        self.locals.is_empty() && self.stmts.is_empty()
    }

    /// Count the local indices this block consumes, nested blocks and loop
    /// counters included.
    pub fn local_count(&self) -> usize {
        self.locals.len() + self.stmts.iter().map(Stmt::local_count).sum::<usize>()
    }

    /// Write the lines between the braces, one indentation level per depth.
    pub(crate) fn write_body(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for ty in &self.locals {
            write_indent(f, depth)?;
            writeln!(f, "local {}", ty)?;
        }
        for stmt in &self.stmts {
            stmt.write(f, depth)?;
        }
        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        self.write_body(f, 1)?;
        writeln!(f, "}}")
    }
}

pub(crate) fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str("    ")?;
    }
    Ok(())
}
