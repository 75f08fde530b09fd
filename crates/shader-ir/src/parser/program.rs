//! Program parser.

use nom::{
    bytes::complete::tag,
    character::complete::char,
    combinator::cut,
    multi::many0,
    sequence::{preceded, terminated},
    IResult,
};

use super::{func::parse_func_internal, primitives::parse_type, whitespace::blank};
use crate::{program::Program, types::Type};

/// Parse a global declaration introduced by `keyword`: uniform float
fn parse_global<'a>(keyword: &'static str) -> impl FnMut(&'a str) -> IResult<&'a str, Type> {
    terminated(preceded(terminated(tag(keyword), blank), cut(parse_type)), blank)
}

/// Parse a program (internal)
/// Globals must be grouped: uniforms, then attributes, then varyings, then functions
pub(crate) fn parse_program_internal(input: &str) -> IResult<&str, Program> {
    let (input, _) = terminated(tag("program"), blank)(input)?;
    let (input, _) = terminated(char('{'), blank)(input)?;

    let (input, uniforms) = many0(parse_global("uniform"))(input)?;
    let (input, attributes) = many0(parse_global("attribute"))(input)?;
    let (input, varyings) = many0(parse_global("varying"))(input)?;
    let (input, funcs) = many0(terminated(parse_func_internal, blank))(input)?;

    let (input, _) = terminated(char('}'), blank)(input)?;

    Ok((
        input,
        Program {
            uniforms,
            attributes,
            varyings,
            funcs,
        },
    ))
}
