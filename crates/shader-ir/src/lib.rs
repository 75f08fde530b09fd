//! Shader Intermediate Representation (IR).
//!
//! This crate defines the IR a shader front end builds and a backend renders:
//! - Types (scalars, vectors, matrices and structs)
//! - Variables (uniform, attribute, varying and local, addressed by index)
//! - Expressions (numeric literals, variable references, binary operations)
//! - Statements and blocks
//! - Functions with in/inout/out parameters
//! - Programs (global declarations plus functions)
//!
//! Every IR value prints to a text form through `Display` and can be read
//! back with [`parse_program`] / [`parse_func`]. [`verify`] checks the
//! invariants a backend relies on.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod block;
mod expr;
mod func;
mod parser;
mod program;
mod stmt;
mod types;
mod variable;
mod verifier;

pub use block::Block;
pub use expr::{BinaryOp, Expr};
pub use func::{Func, ParamDirection};
pub use parser::{parse_func, parse_program, ParseError};
pub use program::Program;
pub use stmt::Stmt;
pub use types::Type;
pub use variable::{Variable, VariableCategory};
pub use verifier::{verify, VerifierError};
