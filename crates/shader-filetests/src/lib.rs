//! File-based tests for shader IR.
//!
//! Similar to Cranelift's filetests, these tests read `.sir` files that contain:
//! - A test command (`test cat`, `test verifier`, `test glsl`)
//! - Programs to test
//! - Expected output or directives in comments after each program

pub mod filecheck;
pub mod parser;

mod test_cat;
mod test_glsl;
mod test_verifier;

pub use crate::filecheck::{build_filechecker, match_filecheck};
pub use parser::{normalize_ir, parse_test_file, TestCase};
