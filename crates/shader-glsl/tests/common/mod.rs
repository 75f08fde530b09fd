//! Shared helpers for renderer tests.

#![allow(dead_code)]

use shader_glsl::render_program;
use shader_ir::{parse_program, verify, Program};

/// Render `program` and compare against `expected`, which omits the final
/// newline the renderer always adds.
pub fn assert_glsl(program: &Program, expected: &str) {
    let actual = render_program(program);
    let expected = format!("{}\n", expected);
    assert_eq!(
        actual, expected,
        "GLSL mismatch\n\nExpected:\n{}\nActual:\n{}",
        expected, actual
    );
}

/// Parse IR text, check it verifies, and render it.
pub fn render_text(source: &str) -> String {
    let program = parse_program(source).unwrap_or_else(|e| {
        let (line, col) = e.line_col(source);
        panic!("{} (line {}, column {})\n\n{}", e, line, col, source)
    });
    if let Err(errors) = verify(&program) {
        let messages: Vec<String> = errors.iter().map(|e| format!("  - {}", e)).collect();
        panic!("program failed verification:\n{}", messages.join("\n"));
    }
    render_program(&program)
}
