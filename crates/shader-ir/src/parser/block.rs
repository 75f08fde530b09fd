//! Block and statement parsers.

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{cut, map},
    multi::many0,
    sequence::{preceded, terminated},
    IResult,
};

use super::{
    expr::parse_expr,
    primitives::{integer, parse_type},
    whitespace::blank,
};
use crate::{block::Block, stmt::Stmt, types::Type};

/// Parse a local declaration: local mat4
fn parse_local(input: &str) -> IResult<&str, Type> {
    preceded(terminated(tag("local"), blank), cut(parse_type))(input)
}

/// Parse a block: { local ... stmt ... }
pub(crate) fn parse_block(input: &str) -> IResult<&str, Block> {
    let (input, _) = terminated(char('{'), blank)(input)?;
    cut(parse_block_rest)(input)
}

fn parse_block_rest(input: &str) -> IResult<&str, Block> {
    let (input, locals) = many0(terminated(parse_local, blank))(input)?;
    let (input, stmts) = many0(terminated(parse_stmt, blank))(input)?;
    let (input, _) = char('}')(input)?;
    Ok((input, Block::new(locals, stmts)))
}

/// Parse a conditional: if <expr> { ... } else { ... }
fn parse_if(input: &str) -> IResult<&str, Stmt> {
    let (input, _) = terminated(tag("if"), blank)(input)?;
    cut(parse_if_rest)(input)
}

fn parse_if_rest(input: &str) -> IResult<&str, Stmt> {
    let (input, cond) = terminated(parse_expr, blank)(input)?;
    let (input, then_block) = terminated(parse_block, blank)(input)?;
    let (input, _) = terminated(tag("else"), blank)(input)?;
    let (input, else_block) = parse_block(input)?;
    Ok((input, Stmt::if_else(cond, then_block, else_block)))
}

/// Parse a counted loop: for 0..100 step 1 { ... }
fn parse_for(input: &str) -> IResult<&str, Stmt> {
    let (input, _) = terminated(tag("for"), blank)(input)?;
    cut(parse_for_rest)(input)
}

fn parse_for_rest(input: &str) -> IResult<&str, Stmt> {
    let (input, init) = terminated(integer, blank)(input)?;
    let (input, _) = terminated(tag(".."), blank)(input)?;
    let (input, limit) = terminated(integer, blank)(input)?;
    let (input, _) = terminated(tag("step"), blank)(input)?;
    let (input, step) = terminated(integer, blank)(input)?;
    let (input, body) = parse_block(input)?;
    Ok((input, Stmt::for_range(init, limit, step, body)))
}

/// Parse an assignment: <expr> = <expr>
fn parse_assign(input: &str) -> IResult<&str, Stmt> {
    let (input, target) = terminated(parse_expr, blank)(input)?;
    let (input, _) = terminated(char('='), blank)(input)?;
    let (input, value) = cut(parse_expr)(input)?;
    Ok((input, Stmt::assign(target, value)))
}

/// Parse a statement
pub(crate) fn parse_stmt(input: &str) -> IResult<&str, Stmt> {
    alt((map(parse_block, Stmt::Block), parse_if, parse_for, parse_assign))(input)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::{BinaryOp, Expr, Variable};

    #[test]
    fn test_parse_empty_block() {
        assert_eq!(parse_block("{}"), Ok(("", Block::empty())));
        assert_eq!(parse_block("{\n}"), Ok(("", Block::empty())));
    }

    #[test]
    fn test_parse_block_locals_and_stmts() {
        let input = "{\n    local mat4\n    local vec2 ; scratch\n    %l3 = %l0\n}";
        let (remaining, block) = parse_block(input).unwrap();
        assert_eq!(remaining, "");
        assert_eq!(block.locals, vec![Type::Mat4, Type::Vec2]);
        assert_eq!(
            block.stmts,
            vec![Stmt::assign(
                Expr::var(Variable::local(3)),
                Expr::var(Variable::local(0))
            )]
        );
    }

    #[test]
    fn test_parse_if() {
        let input = "if eq(%l0, 0.0) {\n    %l2 = %l0\n} else {\n    %l2 = %l1\n}";
        let (remaining, stmt) = parse_stmt(input).unwrap();
        assert_eq!(remaining, "");
        assert_eq!(
            stmt,
            Stmt::if_else(
                Expr::binary(BinaryOp::Eq, Expr::var(Variable::local(0)), Expr::num(0.0)),
                Block::new(
                    vec![],
                    vec![Stmt::assign(
                        Expr::var(Variable::local(2)),
                        Expr::var(Variable::local(0))
                    )]
                ),
                Block::new(
                    vec![],
                    vec![Stmt::assign(
                        Expr::var(Variable::local(2)),
                        Expr::var(Variable::local(1))
                    )]
                ),
            )
        );
    }

    #[test]
    fn test_parse_if_requires_else() {
        assert!(parse_stmt("if %l0 {\n}").is_err());
    }

    #[test]
    fn test_parse_for() {
        let (remaining, stmt) = parse_stmt("for -5..100 step -1 {\n}").unwrap();
        assert_eq!(remaining, "");
        assert_eq!(stmt, Stmt::for_range(-5, 100, -1, Block::empty()));
    }

    #[test]
    fn test_parse_nested_block() {
        let (remaining, stmt) = parse_stmt("{\n    local mat4\n    {\n    }\n}").unwrap();
        assert_eq!(remaining, "");
        assert_eq!(
            stmt,
            Stmt::block(Block::new(
                vec![Type::Mat4],
                vec![Stmt::block(Block::empty())]
            ))
        );
    }

    #[test]
    fn test_locals_must_precede_stmts() {
        assert!(parse_block("{\n    %l0 = 1.0\n    local float\n}").is_err());
    }
}
