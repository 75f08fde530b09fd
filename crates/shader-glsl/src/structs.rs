//! Struct type naming and definitions.

use alloc::{borrow::Cow, format, string::String, vec, vec::Vec};

use shader_ir::{Block, Program, Stmt, Type};

use crate::naming::INDENT;

/// Struct types used by a program.
///
/// Each structurally distinct struct gets one name, `S{i}`, numbered in
/// pre-order of first appearance: globals, then each function's parameters
/// and locals. An enclosing struct is numbered before its member structs.
#[derive(Debug, Default)]
pub(crate) struct StructTable {
    types: Vec<Type>,
}

impl StructTable {
    /// Collect every struct type declared anywhere in `program`.
    pub(crate) fn collect(program: &Program) -> Self {
        let mut table = Self::default();
        let globals = program
            .uniforms
            .iter()
            .chain(&program.attributes)
            .chain(&program.varyings);
        for ty in globals {
            table.register(ty);
        }
        for func in &program.funcs {
            for (_, ty) in func.params() {
                table.register(ty);
            }
            table.register_block(&func.body);
        }
        table
    }

    fn register_block(&mut self, block: &Block) {
        for ty in &block.locals {
            self.register(ty);
        }
        for stmt in &block.stmts {
            match stmt {
                Stmt::Block(block) => self.register_block(block),
                Stmt::Assign { .. } => {}
                Stmt::If {
                    then_block,
                    else_block,
                    ..
                } => {
                    self.register_block(then_block);
                    self.register_block(else_block);
                }
                Stmt::For { body, .. } => self.register_block(body),
            }
        }
    }

    fn register(&mut self, ty: &Type) {
        if ty.is_struct() && self.index_of(ty).is_none() {
            self.types.push(ty.clone());
            for member in ty.members() {
                self.register(member);
            }
        }
    }

    fn index_of(&self, ty: &Type) -> Option<usize> {
        self.types.iter().position(|known| known == ty)
    }

    /// Number of distinct struct types.
    pub(crate) fn len(&self) -> usize {
        self.types.len()
    }

    /// GLSL name of any type: the fixed token, or `S{i}` for a struct.
    ///
    /// # Panics
    ///
    /// Panics if `ty` is a struct that was not collected from the program.
    pub(crate) fn type_name(&self, ty: &Type) -> Cow<'static, str> {
        if let Some(name) = ty.glsl_name() {
            return Cow::Borrowed(name);
        }
        match self.index_of(ty) {
            Some(index) => Cow::Owned(format!("S{}", index)),
            None => panic!("struct type {} was not collected from the program", ty),
        }
    }

    /// Append every struct definition, member structs before the structs
    /// that contain them.
    pub(crate) fn write_definitions(&self, lines: &mut Vec<String>) {
        let mut written = vec![false; self.types.len()];
        for index in 0..self.types.len() {
            self.write_definition(index, &mut written, lines);
        }
    }

    fn write_definition(&self, index: usize, written: &mut [bool], lines: &mut Vec<String>) {
        if written[index] {
            return;
        }
        written[index] = true;

        let members = self.types[index].members();
        for member in members {
            if let Some(member_index) = self.index_of(member) {
                self.write_definition(member_index, written, lines);
            }
        }

        lines.push(format!("struct S{} {{", index));
        for (i, member) in members.iter().enumerate() {
            lines.push(format!("{}{} M{};", INDENT, self.type_name(member), i));
        }
        lines.push(String::from("};"));
    }
}
