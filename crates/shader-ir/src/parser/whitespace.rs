//! Whitespace and comment parsing utilities.

use nom::{
    branch::alt,
    character::complete::{char, multispace1, not_line_ending},
    combinator::{map, recognize},
    multi::many0,
    sequence::pair,
    IResult,
};

/// Parse a `;` comment up to (not including) the line ending
fn comment(input: &str) -> IResult<&str, &str> {
    recognize(pair(char(';'), not_line_ending))(input)
}

/// Parse whitespace and comments - returns the matched string
pub(crate) fn blank_space(input: &str) -> IResult<&str, &str> {
    recognize(many0(alt((map(multispace1, |_| ()), map(comment, |_| ())))))(input)
}

/// Parse whitespace and comments and discard the result
/// This is the whitespace parser used throughout
pub(crate) fn blank(input: &str) -> IResult<&str, ()> {
    map(blank_space, |_| ())(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_space() {
        assert_eq!(blank_space("   "), Ok(("", "   ")));
        assert_eq!(blank_space("\n\t  "), Ok(("", "\n\t  ")));
        assert_eq!(blank_space("  %l0"), Ok(("%l0", "  ")));
        assert_eq!(blank_space(""), Ok(("", "")));
    }

    #[test]
    fn test_comments() {
        assert_eq!(blank("; note\n  func"), Ok(("func", ())));
        assert_eq!(blank("  ; one\n; two\n}"), Ok(("}", ())));
        assert_eq!(blank("; trailing"), Ok(("", ())));
    }
}
