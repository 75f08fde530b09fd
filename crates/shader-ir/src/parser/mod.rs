//! Parser for the IR text format.

mod block;
mod error;
mod expr;
mod func;
mod primitives;
mod program;
mod whitespace;

use alloc::format;

use error::parse_error;
pub use error::ParseError;
use func::parse_func_internal;
use log::trace;
use nom::{sequence::terminated, IResult};
use program::parse_program_internal;
use whitespace::blank;

use crate::{func::Func, program::Program};

/// Run `parser` over the whole of `input`, allowing surrounding whitespace
/// and comments.
fn parse_all<'a, T>(
    input: &'a str,
    parser: impl FnMut(&'a str) -> IResult<&'a str, T>,
) -> Result<T, ParseError> {
    let (start, _) = blank(input).map_err(|_| parse_error(input, input, "invalid leading input"))?;
    match terminated(parser, blank)(start) {
        Ok(("", value)) => Ok(value),
        Ok((remaining, _)) => Err(parse_error(
            input,
            remaining,
            "unexpected input after the end of the definition",
        )),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(parse_error(
            input,
            e.input,
            &format!("syntax error ({:?})", e.code),
        )),
        Err(nom::Err::Incomplete(_)) => Err(parse_error(input, "", "unexpected end of input")),
    }
}

/// Parse a complete program from IR text.
pub fn parse_program(input: &str) -> Result<Program, ParseError> {
    let program = parse_all(input, parse_program_internal)?;
    trace!(
        "parsed program: {} uniforms, {} attributes, {} varyings, {} funcs",
        program.uniforms.len(),
        program.attributes.len(),
        program.varyings.len(),
        program.funcs.len()
    );
    Ok(program)
}

/// Parse a single function from IR text.
pub fn parse_func(input: &str) -> Result<Func, ParseError> {
    let func = parse_all(input, parse_func_internal)?;
    trace!("parsed func @{}", func.name);
    Ok(func)
}
