//! Function parser.

use alloc::vec::Vec;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{cut, map, verify},
    multi::separated_list0,
    sequence::{delimited, terminated, tuple},
    IResult,
};

use super::{
    block::parse_block,
    primitives::{parse_func_name, parse_type},
    whitespace::blank,
};
use crate::{
    func::{Func, ParamDirection},
    types::Type,
};

/// Parse a parameter: in float
fn parse_param(input: &str) -> IResult<&str, (ParamDirection, Type)> {
    let (input, direction) = terminated(
        alt((
            // inout before in, which is its prefix
            map(tag("inout"), |_| ParamDirection::InOut),
            map(tag("in"), |_| ParamDirection::In),
            map(tag("out"), |_| ParamDirection::Out),
        )),
        blank,
    )(input)?;
    let (input, ty) = parse_type(input)?;
    Ok((input, (direction, ty)))
}

/// Parse a parameter list: (in float, inout vec2, out mat4)
/// Directions must appear in order: in, then inout, then out
fn parse_params(input: &str) -> IResult<&str, Vec<(ParamDirection, Type)>> {
    verify(
        delimited(
            terminated(char('('), blank),
            separated_list0(terminated(char(','), blank), terminated(parse_param, blank)),
            char(')'),
        ),
        |params: &[(ParamDirection, Type)]| params.windows(2).all(|w| w[0].0 <= w[1].0),
    )(input)
}

/// Parse a function (internal, used by program parser)
pub(crate) fn parse_func_internal(input: &str) -> IResult<&str, Func> {
    let (input, _) = terminated(tag("func"), blank)(input)?;
    let (input, (name, params, body)) = cut(tuple((
        terminated(parse_func_name, blank),
        terminated(parse_params, blank),
        parse_block,
    )))(input)?;

    let mut func = Func::new(name).with_body(body);
    for (direction, ty) in params {
        match direction {
            ParamDirection::In => func.in_params.push(ty),
            ParamDirection::InOut => func.inout_params.push(ty),
            ParamDirection::Out => func.out_params.push(ty),
        }
    }

    Ok((input, func))
}
