//! IR verifier.
//!
//! Backends assume a well-formed program and treat violations as bugs in the
//! producer. `verify` reports the same conditions as values so a producer can
//! check its output before handing it on.

use alloc::{string::String, vec::Vec};

use thiserror::Error;

use crate::{
    block::Block,
    expr::Expr,
    func::Func,
    program::Program,
    stmt::Stmt,
    variable::{Variable, VariableCategory},
};

/// Verifier error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VerifierError {
    /// A variable index beyond what its category declares at that point.
    #[error("@{func}: {variable} is out of range ({available} available)")]
    VariableOutOfRange {
        func: String,
        variable: Variable,
        available: usize,
    },
    /// NaN or infinite literal; GLSL has no spelling for them.
    #[error("@{func}: non-finite numeric literal {value}")]
    NonFiniteLiteral { func: String, value: f64 },
    /// A `for` loop that never advances its counter.
    #[error("@{func}: for loop step must be nonzero")]
    ZeroStep { func: String },
    /// Assignment to something other than a local or varying.
    #[error("@{func}: cannot assign to {target}")]
    InvalidAssignTarget { func: String, target: String },
    /// Function name that is not a plain identifier.
    #[error("function #{index}: invalid name {name:?}")]
    InvalidFuncName { index: usize, name: String },
    /// Two functions with one name.
    #[error("duplicate function name @{name}")]
    DuplicateFuncName { name: String },
}

/// Verify a program is well-formed
///
/// Runs every check and returns all errors found, in program order.
pub fn verify(program: &Program) -> Result<(), Vec<VerifierError>> {
    let mut errors = Vec::new();

    verify_func_names(program, &mut errors);
    for func in &program.funcs {
        FuncVerifier {
            program,
            func,
            locals: func.param_count(),
            errors: &mut errors,
        }
        .verify_block(&func.body);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn verify_func_names(program: &Program, errors: &mut Vec<VerifierError>) {
    for (index, func) in program.funcs.iter().enumerate() {
        if !is_identifier(&func.name) {
            errors.push(VerifierError::InvalidFuncName {
                index,
                name: func.name.clone(),
            });
        }
        // `Program::func` finds the first function with this name
        let first = program.func(&func.name);
        if !first.is_some_and(|first| core::ptr::eq(first, func)) {
            errors.push(VerifierError::DuplicateFuncName {
                name: func.name.clone(),
            });
        }
    }
}

/// Walks one function body with the running local count.
struct FuncVerifier<'a> {
    program: &'a Program,
    func: &'a Func,
    /// Local indices allocated so far
    locals: usize,
    errors: &'a mut Vec<VerifierError>,
}

impl FuncVerifier<'_> {
    fn verify_block(&mut self, block: &Block) {
        self.locals += block.locals.len();
        for stmt in &block.stmts {
            self.verify_stmt(stmt);
        }
    }

    fn verify_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(block) => self.verify_block(block),
            Stmt::Assign { target, value } => {
                self.verify_target(target);
                self.verify_expr(target);
                self.verify_expr(value);
            }
            Stmt::If {
                cond,
                then_block,
                else_block,
            } => {
                self.verify_expr(cond);
                self.verify_block(then_block);
                self.verify_block(else_block);
            }
            Stmt::For { step, body, .. } => {
                if *step == 0 {
                    self.errors.push(VerifierError::ZeroStep {
                        func: self.func.name.clone(),
                    });
                }
                // The loop counter
                self.locals += 1;
                self.verify_block(body);
            }
        }
    }

    fn verify_target(&mut self, target: &Expr) {
        let assignable = matches!(
            target,
            Expr::Variable(Variable {
                category: VariableCategory::Local | VariableCategory::Varying,
                ..
            })
        );
        if !assignable {
            self.errors.push(VerifierError::InvalidAssignTarget {
                func: self.func.name.clone(),
                target: alloc::format!("{}", target),
            });
        }
    }

    fn verify_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Numeric(value) => {
                if !value.is_finite() {
                    self.errors.push(VerifierError::NonFiniteLiteral {
                        func: self.func.name.clone(),
                        value: *value,
                    });
                }
            }
            Expr::Variable(variable) => {
                let available = match variable.category {
                    VariableCategory::Uniform => self.program.uniforms.len(),
                    VariableCategory::Attribute => self.program.attributes.len(),
                    VariableCategory::Varying => self.program.varyings.len(),
                    VariableCategory::Local => self.locals,
                };
                if variable.index >= available {
                    self.errors.push(VerifierError::VariableOutOfRange {
                        func: self.func.name.clone(),
                        variable: *variable,
                        available,
                    });
                }
            }
            Expr::Binary { lhs, rhs, .. } => {
                self.verify_expr(lhs);
                self.verify_expr(rhs);
            }
        }
    }
}
