//! Expression parser.

use nom::{
    branch::alt,
    character::complete::{alpha1, char},
    combinator::{map, map_opt},
    sequence::terminated,
    IResult,
};

use super::{
    primitives::{float, parse_variable},
    whitespace::blank,
};
use crate::expr::{BinaryOp, Expr};

/// Parse a binary operation: add(%l0, %l1)
fn parse_binary(input: &str) -> IResult<&str, Expr> {
    let (input, op) = terminated(map_opt(alpha1, BinaryOp::from_name), blank)(input)?;
    let (input, _) = terminated(char('('), blank)(input)?;
    let (input, lhs) = terminated(parse_expr, blank)(input)?;
    let (input, _) = terminated(char(','), blank)(input)?;
    let (input, rhs) = terminated(parse_expr, blank)(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, Expr::binary(op, lhs, rhs)))
}

/// Parse an expression
pub(crate) fn parse_expr(input: &str) -> IResult<&str, Expr> {
    // Operator names are tried before literals so `inf`/`nan` spellings
    // only reach the float parser when no operator matches
    alt((
        map(parse_variable, Expr::from),
        parse_binary,
        map(float, Expr::Numeric),
    ))(input)
}
