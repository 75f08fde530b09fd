//! Program rendering.

use alloc::{format, string::String, vec::Vec};

use log::{debug, trace};
use shader_ir::{Func, Program, Type, Variable};

use crate::{naming::variable_name, stmt::BodyWriter, structs::StructTable};

/// Render `program` to GLSL source.
///
/// Shorthand for `GlslRenderer::new(program).render()`.
///
/// # Panics
///
/// Panics if the program references a variable outside the range its
/// category declares. Run [`shader_ir::verify`] first to report such
/// programs as errors instead.
pub fn render_program(program: &Program) -> String {
    GlslRenderer::new(program).render()
}

/// Renders one program to GLSL source.
///
/// The output is, in order: struct definitions, uniform, attribute and
/// varying declarations, then each function. Lines are joined with `\n` and
/// the text always ends with exactly one `\n`, so an empty program renders
/// to `"\n"`.
///
/// The renderer only reads the program, so one program may be rendered from
/// several threads at once.
pub struct GlslRenderer<'a> {
    program: &'a Program,
    structs: StructTable,
    lines: Vec<String>,
}

impl<'a> GlslRenderer<'a> {
    /// Create a renderer for `program`, naming its struct types up front.
    pub fn new(program: &'a Program) -> Self {
        Self {
            program,
            structs: StructTable::collect(program),
            lines: Vec::new(),
        }
    }

    /// Produce the GLSL source.
    ///
    /// # Panics
    ///
    /// See [`render_program`].
    pub fn render(mut self) -> String {
        let program = self.program;
        debug!(
            "rendering GLSL: {} structs, {} uniforms, {} attributes, {} varyings, {} funcs",
            self.structs.len(),
            program.uniforms.len(),
            program.attributes.len(),
            program.varyings.len(),
            program.funcs.len()
        );

        self.structs.write_definitions(&mut self.lines);
        self.write_globals("uniform", &program.uniforms, Variable::uniform);
        self.write_globals("attribute", &program.attributes, Variable::attribute);
        self.write_globals("varying", &program.varyings, Variable::varying);
        for func in &program.funcs {
            self.write_func(func);
        }

        let mut source = self.lines.join("\n");
        source.push('\n');
        source
    }

    fn write_globals(
        &mut self,
        qualifier: &str,
        types: &[Type],
        variable: fn(usize) -> Variable,
    ) {
        for (index, ty) in types.iter().enumerate() {
            self.lines.push(format!(
                "{} {} {};",
                qualifier,
                self.structs.type_name(ty),
                variable_name(variable(index))
            ));
        }
    }

    fn write_func(&mut self, func: &Func) {
        trace!(
            "rendering func {}: {} params, {} locals",
            func.name,
            func.param_count(),
            func.local_count()
        );

        let mut writer = BodyWriter::new(self.program, &self.structs, &mut self.lines);
        let params: Vec<String> = func
            .params()
            .map(|(direction, ty)| writer.declare_param(direction, ty))
            .collect();
        let params = if params.is_empty() {
            String::from("void")
        } else {
            params.join(", ")
        };

        writer.push_line(0, &format!("void {}({}) {{", func.name, params));
        writer.write_block(&func.body, 1);
        writer.push_line(0, "}");
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use shader_ir::Block;

    use super::*;

    #[test]
    fn test_empty_program() {
        assert_eq!(render_program(&Program::new()), "\n");
    }

    #[test]
    fn test_globals() {
        let program = Program {
            uniforms: vec![Type::Float, Type::Vec4],
            attributes: vec![Type::Vec2],
            varyings: vec![Type::Vec3, Type::Mat3],
            funcs: vec![],
        };
        assert_eq!(
            render_program(&program),
            "uniform float U0;\nuniform vec4 U1;\nattribute vec2 A0;\nvarying vec3 V0;\nvarying mat3 V1;\n"
        );
    }

    #[test]
    fn test_functions_restart_local_numbering() {
        let program = Program {
            funcs: vec![
                Func::new("F0")
                    .with_in(vec![Type::Float])
                    .with_body(Block::new(vec![Type::Vec2], vec![])),
                Func::new("F1").with_out(vec![Type::Float]),
            ],
            ..Program::default()
        };
        assert_eq!(
            render_program(&program),
            "void F0(in float l0) {\n\tvec2 l1;\n}\nvoid F1(out float l0) {\n}\n"
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let program = Program {
            uniforms: vec![Type::Struct(vec![Type::Float])],
            ..Program::default()
        };
        let first = GlslRenderer::new(&program).render();
        let second = GlslRenderer::new(&program).render();
        assert_eq!(first, second);
    }
}
