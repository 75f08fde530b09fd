//! Block and statement rendering.

use alloc::{format, string::String, vec::Vec};

use shader_ir::{Block, Expr, ParamDirection, Program, Stmt, Type, Variable};

use crate::{
    expr::render_expr,
    naming::{indent, variable_name, LocalCounter},
    structs::StructTable,
};

/// Writes one function: its parameter declarations and its body.
///
/// Owns the function's local counter, so every parameter, block local and
/// loop counter is numbered from one sequence.
pub(crate) struct BodyWriter<'a> {
    program: &'a Program,
    structs: &'a StructTable,
    locals: LocalCounter,
    lines: &'a mut Vec<String>,
}

impl<'a> BodyWriter<'a> {
    pub(crate) fn new(
        program: &'a Program,
        structs: &'a StructTable,
        lines: &'a mut Vec<String>,
    ) -> Self {
        Self {
            program,
            structs,
            locals: LocalCounter::new(),
            lines,
        }
    }

    pub(crate) fn push_line(&mut self, depth: usize, text: &str) {
        self.lines.push(format!("{}{}", indent(depth), text));
    }

    /// Allocate a local for `ty` and return its declaration, `vec2 l3`.
    fn declare_local(&mut self, ty: &Type) -> String {
        let name = variable_name(Variable::local(self.locals.alloc()));
        format!("{} {}", self.structs.type_name(ty), name)
    }

    /// Allocate a parameter and return its declaration, `inout vec2 l1`.
    pub(crate) fn declare_param(&mut self, direction: ParamDirection, ty: &Type) -> String {
        format!("{} {}", direction.keyword(), self.declare_local(ty))
    }

    fn expr(&self, expr: &Expr) -> String {
        render_expr(expr, self.program, self.locals.allocated())
    }

    /// Write a block's declarations and statements at `depth`.
    pub(crate) fn write_block(&mut self, block: &Block, depth: usize) {
        for ty in &block.locals {
            let decl = self.declare_local(ty);
            self.push_line(depth, &format!("{};", decl));
        }
        for stmt in &block.stmts {
            self.write_stmt(stmt, depth);
        }
    }

    fn write_stmt(&mut self, stmt: &Stmt, depth: usize) {
        match stmt {
            Stmt::Block(block) => {
                self.push_line(depth, "{");
                self.write_block(block, depth + 1);
                self.push_line(depth, "}");
            }
            Stmt::Assign { target, value } => {
                let line = format!("{} = {};", self.expr(target), self.expr(value));
                self.push_line(depth, &line);
            }
            Stmt::If {
                cond,
                then_block,
                else_block,
            } => {
                let line = format!("if ({}) {{", self.expr(cond));
                self.push_line(depth, &line);
                self.write_block(then_block, depth + 1);
                self.push_line(depth, "} else {");
                self.write_block(else_block, depth + 1);
                self.push_line(depth, "}");
            }
            Stmt::For {
                init,
                limit,
                step,
                body,
            } => {
                let counter = variable_name(Variable::local(self.locals.alloc()));
                let line = format!(
                    "for (int {counter} = {init}; {counter} < {limit}; {counter}{}) {{",
                    increment(*step)
                );
                self.push_line(depth, &line);
                self.write_block(body, depth + 1);
                self.push_line(depth, "}");
            }
        }
    }
}

/// Loop increment suffix: `++` and `--` for unit steps, ` += n` otherwise.
fn increment(step: i32) -> String {
    match step {
        1 => String::from("++"),
        -1 => String::from("--"),
        step => format!(" += {}", step),
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use shader_ir::BinaryOp;

    use super::*;

    fn render_body(program: &Program, params: usize, block: &Block) -> Vec<String> {
        let structs = StructTable::collect(program);
        let mut lines = Vec::new();
        let mut writer = BodyWriter::new(program, &structs, &mut lines);
        for _ in 0..params {
            writer.declare_param(ParamDirection::In, &Type::Float);
        }
        writer.write_block(block, 1);
        lines
    }

    #[test]
    fn test_increment() {
        assert_eq!(increment(1), "++");
        assert_eq!(increment(-1), "--");
        assert_eq!(increment(2), " += 2");
        assert_eq!(increment(-3), " += -3");
        assert_eq!(increment(0), " += 0");
    }

    #[test]
    fn test_declare_param() {
        let program = Program::new();
        let structs = StructTable::collect(&program);
        let mut lines = Vec::new();
        let mut writer = BodyWriter::new(&program, &structs, &mut lines);
        assert_eq!(writer.declare_param(ParamDirection::In, &Type::Float), "in float l0");
        assert_eq!(
            writer.declare_param(ParamDirection::InOut, &Type::Vec2),
            "inout vec2 l1"
        );
        assert_eq!(writer.declare_param(ParamDirection::Out, &Type::Mat4), "out mat4 l2");
    }

    #[test]
    fn test_nested_blocks_continue_numbering() {
        let block = Block::new(
            vec![Type::Mat4],
            vec![
                Stmt::block(Block::new(vec![Type::Vec2, Type::Vec3], vec![])),
                Stmt::block(Block::new(vec![Type::Float], vec![])),
            ],
        );
        assert_eq!(
            render_body(&Program::new(), 1, &block),
            vec![
                "\tmat4 l1;",
                "\t{",
                "\t\tvec2 l2;",
                "\t\tvec3 l3;",
                "\t}",
                "\t{",
                "\t\tfloat l4;",
                "\t}",
            ]
        );
    }

    #[test]
    fn test_if_with_empty_else() {
        let block = Block::new(
            vec![],
            vec![Stmt::if_else(
                Expr::binary(BinaryOp::Gt, Expr::var(Variable::local(0)), Expr::num(1.0)),
                Block::new(
                    vec![],
                    vec![Stmt::assign(Expr::var(Variable::local(0)), Expr::num(1.0))],
                ),
                Block::empty(),
            )],
        );
        assert_eq!(
            render_body(&Program::new(), 1, &block),
            vec![
                "\tif ((l0) > (1.000000000e+00)) {",
                "\t\tl0 = 1.000000000e+00;",
                "\t} else {",
                "\t}",
            ]
        );
    }

    #[test]
    fn test_for_locals_follow_counter() {
        let block = Block::new(
            vec![],
            vec![
                Stmt::for_range(
                    10,
                    0,
                    -1,
                    Block::new(
                        vec![Type::Float],
                        vec![Stmt::assign(
                            Expr::var(Variable::local(2)),
                            Expr::var(Variable::local(0)),
                        )],
                    ),
                ),
                Stmt::for_range(0, 8, 2, Block::empty()),
            ],
        );
        assert_eq!(
            render_body(&Program::new(), 1, &block),
            vec![
                "\tfor (int l1 = 10; l1 < 0; l1--) {",
                "\t\tfloat l2;",
                "\t\tl2 = l0;",
                "\t}",
                "\tfor (int l3 = 0; l3 < 8; l3 += 2) {",
                "\t}",
            ]
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_reference_before_declaration_panics() {
        // %l1 is declared by the nested block, after this statement
        let block = Block::new(
            vec![],
            vec![
                Stmt::assign(Expr::var(Variable::local(0)), Expr::var(Variable::local(1))),
                Stmt::block(Block::new(vec![Type::Float], vec![])),
            ],
        );
        render_body(&Program::new(), 1, &block);
    }
}
