//! The `glsl` subtest - render programs and match the output with filecheck

use shader_glsl::render_program;
use shader_ir::{parse_program, verify};

use crate::{filecheck::match_filecheck, parser::parse_test_file};

/// Run tests from glsl test files
#[allow(dead_code)]
pub fn run_tests_from_file(content: &str) {
    let test_cases = parse_test_file(content);

    assert!(!test_cases.is_empty(), "No test cases found in test file");

    for case in test_cases {
        assert_eq!(
            case.command, "test glsl",
            "Unexpected test command: {}",
            case.command
        );
        run_glsl_test(&case.program_text, &case.expected_text);
    }
}

/// Run a single glsl test
#[allow(dead_code)]
fn run_glsl_test(program_text: &str, expected_text: &str) {
    let program = parse_program(program_text).unwrap_or_else(|e| {
        panic!(
            "Failed to parse program: {}\n\nProgram text:\n{}",
            e, program_text
        )
    });

    if let Err(errors) = verify(&program) {
        panic!(
            "Program failed verification:\n{}\n\nProgram text:\n{}",
            errors
                .iter()
                .map(|e| format!("  - {}", e))
                .collect::<Vec<_>>()
                .join("\n"),
            program_text
        );
    }

    let actual = render_program(&program);
    if let Err(e) = match_filecheck(&actual, expected_text) {
        panic!(
            "GLSL test failed!\n\n{}\n\nActual output:\n{}\n\nProgram text:\n{}",
            e, actual, program_text
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glsl_globals() {
        let content = include_str!("../filetests/glsl/globals.sir");
        run_tests_from_file(content);
    }

    #[test]
    fn test_glsl_funcs() {
        let content = include_str!("../filetests/glsl/funcs.sir");
        run_tests_from_file(content);
    }

    #[test]
    fn test_glsl_control_flow() {
        let content = include_str!("../filetests/glsl/control_flow.sir");
        run_tests_from_file(content);
    }
}
