//! GLSL renderer for shader IR.
//!
//! This crate lowers a [`shader_ir::Program`] to GLSL source text. Output is
//! fully determined by the program: every identifier is synthesized from a
//! variable's category and index (`U0`, `A0`, `V0`, `l0`), struct types are
//! named `S0, S1, ...` with members `M0, M1, ...`, literals use a fixed
//! scientific format and binary operands are always parenthesized.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod expr;
mod naming;
mod renderer;
mod stmt;
mod structs;

pub use expr::format_float;
pub use naming::variable_name;
pub use renderer::{render_program, GlslRenderer};
