//! Parse error types.

use alloc::string::{String, ToString};

use thiserror::Error;

/// Parse error with position information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error at position {position}: {message}")]
pub struct ParseError {
    pub message: String,
    /// Byte offset into the parsed text.
    pub position: usize,
}

impl ParseError {
    /// Convert the byte position to a 1-based (line, column) pair in `source`.
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        let before = &source[..self.position.min(source.len())];
        let line = before.matches('\n').count() + 1;
        let col = before.len() - before.rfind('\n').map_or(0, |i| i + 1) + 1;
        (line, col)
    }
}

pub(crate) fn parse_error(original_input: &str, remaining_input: &str, message: &str) -> ParseError {
    ParseError {
        message: message.to_string(),
        position: original_input.len() - remaining_input.len(),
    }
}
