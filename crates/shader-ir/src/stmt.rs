//! Statements.

use core::fmt;

use crate::{
    block::{write_indent, Block},
    expr::Expr,
};

/// An effectful statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Nested scope
    Block(Block),
    /// target = value
    Assign { target: Expr, value: Expr },
    /// Conditional with both branches always present
    If {
        cond: Expr,
        then_block: Block,
        else_block: Block,
    },
    /// Counted loop: a fresh int counter runs from `init` while below
    /// `limit`, advancing by `step`
    For {
        init: i32,
        limit: i32,
        step: i32,
        body: Block,
    },
}

impl Stmt {
    pub fn block(block: Block) -> Self {
        Stmt::Block(block)
    }

    pub fn assign(target: Expr, value: Expr) -> Self {
        Stmt::Assign { target, value }
    }

    pub fn if_else(cond: Expr, then_block: Block, else_block: Block) -> Self {
        Stmt::If {
            cond,
            then_block,
            else_block,
        }
    }

    pub fn for_range(init: i32, limit: i32, step: i32, body: Block) -> Self {
        Stmt::For {
            init,
            limit,
            step,
            body,
        }
    }

    /// Count the local indices this statement consumes.
    pub fn local_count(&self) -> usize {
        match self {
            Stmt::Block(block) => block.local_count(),
            Stmt::Assign { .. } => 0,
            Stmt::If {
                then_block,
                else_block,
                ..
            } => then_block.local_count() + else_block.local_count(),
            // The counter itself takes one index
            Stmt::For { body, .. } => 1 + body.local_count(),
        }
    }

    pub(crate) fn write(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write_indent(f, depth)?;
        match self {
            Stmt::Block(block) => {
                writeln!(f, "{{")?;
                block.write_body(f, depth + 1)?;
            }
            Stmt::Assign { target, value } => {
                return writeln!(f, "{} = {}", target, value);
            }
            Stmt::If {
                cond,
                then_block,
                else_block,
            } => {
                writeln!(f, "if {} {{", cond)?;
                then_block.write_body(f, depth + 1)?;
                write_indent(f, depth)?;
                writeln!(f, "}} else {{")?;
                else_block.write_body(f, depth + 1)?;
            }
            Stmt::For {
                init,
                limit,
                step,
                body,
            } => {
                writeln!(f, "for {}..{} step {} {{", init, limit, step)?;
                body.write_body(f, depth + 1)?;
            }
        }
        write_indent(f, depth)?;
        writeln!(f, "}}")
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, 0)
    }
}
