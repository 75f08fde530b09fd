//! Expression rendering.

use alloc::{format, string::String};

use shader_ir::{Expr, Program, Variable, VariableCategory};

use crate::naming::variable_name;

/// Format a numeric literal the way GLSL output spells every float:
/// nine fractional digits, lowercase `e`, signed exponent of at least two
/// digits (`0.000000000e+00`, `-1.500000000e-07`).
///
/// Non-finite values have no exponent and come back as Rust prints them.
pub fn format_float(value: f64) -> String {
    let text = format!("{:.9e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

/// Render an expression. Both operands of a binary operation are wrapped in
/// parentheses, so the text is correct whatever the operator precedence.
///
/// `locals` is the number of local indices allocated at this point in the
/// enclosing function.
///
/// # Panics
///
/// Panics if a variable index is beyond what its category declares.
pub(crate) fn render_expr(expr: &Expr, program: &Program, locals: usize) -> String {
    match expr {
        Expr::Numeric(value) => format_float(*value),
        Expr::Variable(variable) => {
            check_in_range(*variable, program, locals);
            variable_name(*variable)
        }
        Expr::Binary { op, lhs, rhs } => format!(
            "({}) {} ({})",
            render_expr(lhs, program, locals),
            op.token(),
            render_expr(rhs, program, locals)
        ),
    }
}

fn check_in_range(variable: Variable, program: &Program, locals: usize) {
    let available = match variable.category {
        VariableCategory::Uniform => program.uniforms.len(),
        VariableCategory::Attribute => program.attributes.len(),
        VariableCategory::Varying => program.varyings.len(),
        VariableCategory::Local => locals,
    };
    assert!(
        variable.index < available,
        "variable {} ({}) is out of range: {} available",
        variable,
        variable_name(variable),
        available
    );
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use shader_ir::{BinaryOp, Type};

    use super::*;

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(0.0), "0.000000000e+00");
        assert_eq!(format_float(1.0), "1.000000000e+00");
        assert_eq!(format_float(-1.5), "-1.500000000e+00");
        assert_eq!(format_float(1234.5), "1.234500000e+03");
        assert_eq!(format_float(0.1), "1.000000000e-01");
        assert_eq!(format_float(2.5e-10), "2.500000000e-10");
        assert_eq!(format_float(1e100), "1.000000000e+100");
    }

    #[test]
    fn test_format_float_is_stable() {
        for value in [0.0, 3.25, -7.0e12, 1.0 / 3.0] {
            assert_eq!(format_float(value), format_float(value));
        }
    }

    #[test]
    fn test_render_binary_parenthesizes() {
        let program = Program::new();
        let expr = Expr::binary(
            BinaryOp::Mul,
            Expr::binary(BinaryOp::Add, Expr::var(Variable::local(0)), Expr::num(1.0)),
            Expr::var(Variable::local(1)),
        );
        assert_eq!(
            render_expr(&expr, &program, 2),
            "((l0) + (1.000000000e+00)) * (l1)"
        );
    }

    #[test]
    fn test_render_globals() {
        let program = Program {
            uniforms: vec![Type::Float],
            attributes: vec![Type::Vec2],
            varyings: vec![Type::Vec3],
            funcs: vec![],
        };
        let expr = Expr::binary(
            BinaryOp::Ne,
            Expr::var(Variable::uniform(0)),
            Expr::binary(
                BinaryOp::Sub,
                Expr::var(Variable::attribute(0)),
                Expr::var(Variable::varying(0)),
            ),
        );
        assert_eq!(render_expr(&expr, &program, 0), "(U0) != ((A0) - (V0))");
    }

    #[test]
    #[should_panic(expected = "variable %l2 (l2) is out of range: 2 available")]
    fn test_local_out_of_range_panics() {
        render_expr(&Expr::var(Variable::local(2)), &Program::new(), 2);
    }

    #[test]
    #[should_panic(expected = "variable %u0 (U0) is out of range: 0 available")]
    fn test_uniform_out_of_range_panics() {
        render_expr(&Expr::var(Variable::uniform(0)), &Program::new(), 0);
    }
}
