//! The `cat` subtest - roundtrip parse/print tests

use shader_ir::parse_program;

use crate::parser::{normalize_ir, parse_test_file};

/// Run tests from cat test files
#[allow(dead_code)]
pub fn run_tests_from_file(content: &str) {
    let test_cases = parse_test_file(content);

    assert!(!test_cases.is_empty(), "No test cases found in test file");

    for case in test_cases {
        assert_eq!(
            case.command, "test cat",
            "Unexpected test command: {}",
            case.command
        );
        run_cat_test(&case.program_text, &case.expected_text);
    }
}

/// Run a single cat test (roundtrip parse/print)
///
/// With no expected text, the printed program must match the input.
#[allow(dead_code)]
fn run_cat_test(program_text: &str, expected_text: &str) {
    let program = parse_program(program_text).unwrap_or_else(|e| {
        panic!(
            "Failed to parse program: {}\n\nProgram text:\n{}",
            e, program_text
        )
    });

    let actual = format!("{}", program);
    let expected = if expected_text.is_empty() {
        program_text
    } else {
        expected_text
    };

    if normalize_ir(&actual) != normalize_ir(expected) {
        panic!(
            "Cat test failed!\n\nExpected:\n{}\n\nActual:\n{}\n\nOriginal program:\n{}",
            expected, actual, program_text
        );
    }

    let reparsed = parse_program(&actual)
        .unwrap_or_else(|e| panic!("Failed to reparse printed program: {}\n\n{}", e, actual));
    assert_eq!(reparsed, program, "Printed program does not reparse to itself");
}
