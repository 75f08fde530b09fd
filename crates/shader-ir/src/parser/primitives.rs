//! Primitive parsers for types, variables, names, and literals.

use alloc::string::{String, ToString};

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1},
    combinator::{map, map_res, opt, recognize},
    multi::separated_list0,
    number::complete::double,
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};

use super::whitespace::blank;
use crate::{
    types::Type,
    variable::{Variable, VariableCategory},
};

/// Parse an integer literal
pub(crate) fn integer(input: &str) -> IResult<&str, i32> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        s.parse::<i32>()
    })(input)
}

/// Parse an unsigned index
pub(crate) fn index(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

/// Parse a float literal, including `inf`, `-inf` and `NaN`
pub(crate) fn float(input: &str) -> IResult<&str, f64> {
    // `double` takes no sign before the exception spellings
    alt((double, map(preceded(char('-'), double), |value: f64| -value)))(input)
}

/// Parse a struct type: struct { float, vec2 }
fn parse_struct(input: &str) -> IResult<&str, Type> {
    let (input, _) = terminated(tag("struct"), blank)(input)?;
    let (input, members) = delimited(
        terminated(char('{'), blank),
        separated_list0(terminated(char(','), blank), terminated(parse_type, blank)),
        char('}'),
    )(input)?;
    Ok((input, Type::Struct(members)))
}

/// Parse a type (float, vec3, mat4, struct { ... }, etc.)
pub(crate) fn parse_type(input: &str) -> IResult<&str, Type> {
    alt((
        parse_struct,
        map(tag("bool"), |_| Type::Bool),
        map(tag("int"), |_| Type::Int),
        map(tag("float"), |_| Type::Float),
        map(tag("vec2"), |_| Type::Vec2),
        map(tag("vec3"), |_| Type::Vec3),
        map(tag("vec4"), |_| Type::Vec4),
        map(tag("mat2"), |_| Type::Mat2),
        map(tag("mat3"), |_| Type::Mat3),
        map(tag("mat4"), |_| Type::Mat4),
    ))(input)
}

/// Parse a variable (%u0, %a1, %v2, %l3)
pub(crate) fn parse_variable(input: &str) -> IResult<&str, Variable> {
    let (input, _) = char('%')(input)?;
    let (input, category) = alt((
        map(char('u'), |_| VariableCategory::Uniform),
        map(char('a'), |_| VariableCategory::Attribute),
        map(char('v'), |_| VariableCategory::Varying),
        map(char('l'), |_| VariableCategory::Local),
    ))(input)?;
    let (input, index) = index(input)?;
    Ok((input, Variable::new(category, index)))
}

/// Parse a function name (@name)
pub(crate) fn parse_func_name(input: &str) -> IResult<&str, String> {
    map(
        preceded(
            char('@'),
            take_while1(|c: char| c.is_alphanumeric() || c == '_'),
        ),
        |s: &str| s.to_string(),
    )(input)
}
