//! The `verifier` subtest - verifier error detection tests

use shader_ir::{parse_program, verify};

use crate::parser::parse_test_file;

/// Run tests from verifier test files
#[allow(dead_code)]
pub fn run_tests_from_file(content: &str) {
    let test_cases = parse_test_file(content);

    assert!(!test_cases.is_empty(), "No test cases found in test file");

    for case in test_cases {
        assert_eq!(
            case.command, "test verifier",
            "Unexpected test command: {}",
            case.command
        );
        run_verifier_test(&case.program_text, &case.expected_text);
    }
}

/// Extract `error:` annotations from the expected text
#[allow(dead_code)]
fn extract_error_annotations(expected_text: &str) -> Vec<String> {
    expected_text
        .lines()
        .filter_map(|line| line.trim().strip_prefix("error:"))
        .map(|message| String::from(message.trim()))
        .collect()
}

/// Run a single verifier test
///
/// The program must produce exactly the annotated errors, in order. A
/// program without annotations must verify.
#[allow(dead_code)]
fn run_verifier_test(program_text: &str, expected_text: &str) {
    let program = parse_program(program_text).unwrap_or_else(|e| {
        panic!(
            "Failed to parse program: {}\n\nProgram text:\n{}",
            e, program_text
        )
    });

    let expected_errors = extract_error_annotations(expected_text);
    let actual_errors: Vec<String> = match verify(&program) {
        Ok(()) => Vec::new(),
        Err(errors) => errors.iter().map(|e| e.to_string()).collect(),
    };

    if actual_errors != expected_errors {
        panic!(
            "Verifier test failed!\n\nExpected errors:\n{}\n\nActual errors:\n{}\n\nProgram:\n{}",
            expected_errors
                .iter()
                .map(|e| format!("  - {}", e))
                .collect::<Vec<_>>()
                .join("\n"),
            actual_errors
                .iter()
                .map(|e| format!("  - {}", e))
                .collect::<Vec<_>>()
                .join("\n"),
            program_text
        );
    }
}
