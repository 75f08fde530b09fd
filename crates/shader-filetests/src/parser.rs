//! Test file parsing

/// A test case extracted from a test file
#[derive(Debug, Clone)]
pub struct TestCase {
    /// The program text
    pub program_text: String,
    /// The expected output text (from comments) or annotations
    pub expected_text: String,
    /// The test command type
    pub command: String,
}

/// Strip a trailing `;` comment from an IR line.
fn code_part(line: &str) -> &str {
    match line.find(';') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Find the line that closes the program starting at `start`.
fn find_program_end(lines: &[&str], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut opened = false;
    for (i, line) in lines.iter().enumerate().skip(start) {
        for ch in code_part(line).chars() {
            match ch {
                '{' => {
                    depth += 1;
                    opened = true;
                }
                '}' => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
        if opened && depth == 0 {
            return Some(i);
        }
    }
    None
}

/// Parse a test file and extract programs with their expected outputs
///
/// The file starts with a `test <command>` line. Each program is followed by
/// its expectations as `;` comment lines, which run until the next line that
/// is neither blank nor a comment.
pub fn parse_test_file(content: &str) -> Vec<TestCase> {
    let lines: Vec<&str> = content.lines().collect();
    let mut test_cases = Vec::new();

    let Some(header) = lines.iter().position(|l| l.trim().starts_with("test ")) else {
        return test_cases;
    };
    let command = String::from(lines[header].trim());
    let mut i = header + 1;

    while i < lines.len() {
        if !lines[i].trim().starts_with("program") {
            i += 1;
            continue;
        }

        let start = i;
        let end = find_program_end(&lines, start)
            .unwrap_or_else(|| panic!("unterminated program starting at line {}", start + 1));
        let program_text = lines[start..=end].join("\n");

        // Expectations: comment lines after the program, blank lines allowed
        let mut expected = Vec::new();
        i = end + 1;
        while i < lines.len() {
            let line = lines[i].trim();
            if let Some(comment) = line.strip_prefix(';') {
                expected.push(comment.trim());
            } else if !line.is_empty() {
                break;
            }
            i += 1;
        }

        test_cases.push(TestCase {
            program_text,
            expected_text: expected.join("\n"),
            command: command.clone(),
        });
    }

    test_cases
}

/// Normalize IR text for comparison
pub fn normalize_ir(ir: &str) -> Vec<String> {
    ir.lines()
        .map(|l| String::from(code_part(l).trim()))
        .filter(|l| !l.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_test_file() {
        let content = "\
; leading comment
test glsl

program {
    uniform float ; {
}
; check: uniform float U0;

; nextln: end

program { }
";
        let cases = parse_test_file(content);
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].command, "test glsl");
        assert_eq!(cases[0].program_text, "program {\n    uniform float ; {\n}");
        assert_eq!(cases[0].expected_text, "check: uniform float U0;\nnextln: end");
        assert_eq!(cases[1].program_text, "program { }");
        assert_eq!(cases[1].expected_text, "");
    }

    #[test]
    fn test_no_header() {
        assert!(parse_test_file("program {\n}\n").is_empty());
    }

    #[test]
    fn test_normalize_ir() {
        assert_eq!(
            normalize_ir("  program {\n\n    uniform float ; time\n}\n"),
            vec!["program {", "uniform float", "}"]
        );
    }
}
