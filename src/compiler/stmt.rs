//! Bytecode emission for statements.

use super::{Compiler, FunctionScope, Local, LOCALS_MAX};
use super::error::{CompileError, CompileErrorKind};
use crate::ast::{Expr, ExprKind, Stmt, StmtKind};
use crate::bytecode::OpCode;
use crate::token::Span;

impl Compiler {
    /// Emits code for one statement.
    ///
    /// Every statement leaves the stack depth unchanged, with one
    /// deliberate exception: a `let` inside a function leaves its value
    /// on the stack, because that stack slot IS the local's storage for
    /// the rest of the frame.
    pub(super) fn compile_stmt(&mut self, stmt: &Stmt) -> Result<(), CompileError> {
        match &stmt.kind {
            StmtKind::Expr(expr) => self.compile_expr_stmt(expr),
            StmtKind::Let { name, value } => self.compile_let(name, value, stmt.span),
            StmtKind::While { condition, body } => self.compile_while(condition, body, stmt.span),
            StmtKind::Out(value) => {
                self.compile_expr(value)?;
                self.chunk.write_op(OpCode::Out);
                Ok(())
            }
            StmtKind::In { name } => self.compile_in(name, stmt.span),
            StmtKind::Block(stmts) => {
                for stmt in stmts {
                    self.compile_stmt(stmt)?;
                }
                Ok(())
            }
            StmtKind::Function {
                name, params, body, ..
            } => self.compile_function(name, params, body, stmt.span),
            StmtKind::Return(value) => self.compile_return(value.as_ref(), stmt.span),
        }
    }

    /// Emits an expression statement.
    ///
    /// The expression's value is discarded with one `POP`, except that an
    /// `if` needs none (`JUMP_IF_FALSE` already popped the condition and
    /// the branch bodies are statements).
    fn compile_expr_stmt(&mut self, expr: &Expr) -> Result<(), CompileError> {
        self.compile_expr(expr)?;
        match expr.kind {
            ExprKind::If { .. } => {}
            _ => self.chunk.write_op(OpCode::Pop),
        }
        Ok(())
    }

    /// Emits a `let` definition.
    fn compile_let(&mut self, name: &str, value: &Expr, span: Span) -> Result<(), CompileError> {
        self.compile_expr(value)?;

        match self.scope.as_mut() {
            Some(scope) => {
                if scope.locals.len() >= LOCALS_MAX {
                    return Err(CompileError::new(
                        CompileErrorKind::TooManyLocals,
                        "Too many locals in one function",
                        span,
                    ));
                }
                let slot = scope.locals.len() as u8;
                scope.locals.push(Local {
                    name: name.to_string(),
                    slot,
                });
                // The computed value stays on the stack: it is the local.
            }
            None => {
                let name_id = self.intern_global(name, span)?;
                self.chunk.write_op(OpCode::DefineGlobal);
                self.chunk.write_byte(name_id);
            }
        }
        Ok(())
    }

    /// Emits a `while` loop.
    fn compile_while(
        &mut self,
        condition: &Expr,
        body: &[Stmt],
        span: Span,
    ) -> Result<(), CompileError> {
        let loop_start = self.chunk.len();
        self.compile_expr(condition)?;

        let exit_jump = self.emit_jump(OpCode::JumpIfFalse);
        for stmt in body {
            self.compile_stmt(stmt)?;
        }
        self.emit_loop(loop_start, span)?;
        self.patch_jump(exit_jump, span)
    }

    /// Emits an `in` statement.
    ///
    /// Inside a function the target must be an existing local; `in`
    /// cannot introduce one.
    fn compile_in(&mut self, name: &str, span: Span) -> Result<(), CompileError> {
        if self.in_function() {
            let Some(slot) = self.find_local(name) else {
                return Err(CompileError::new(
                    CompileErrorKind::UndeclaredLocalInput,
                    format!("Input to undeclared local '{}'", name),
                    span,
                ));
            };
            self.chunk.write_op(OpCode::InLocal);
            self.chunk.write_byte(slot);
        } else {
            let name_id = self.intern_global(name, span)?;
            self.chunk.write_op(OpCode::In);
            self.chunk.write_byte(name_id);
        }
        Ok(())
    }

    /// Emits a function definition.
    ///
    /// The body is wrapped in a skip jump so straight-line execution
    /// flows past it; the entry offset just after that jump is recorded
    /// under the function's qualified name. Compilation of the body runs
    /// in a fresh scope whose first slots are the parameters, and an
    /// implicit `return 0` is appended for bodies that fall off the end.
    fn compile_function(
        &mut self,
        name: &str,
        params: &[String],
        body: &[Stmt],
        span: Span,
    ) -> Result<(), CompileError> {
        let skip_jump = self.emit_jump(OpCode::Jump);

        let entry = self.chunk.len();
        self.register_function(name, entry, span)?;

        if params.len() > LOCALS_MAX {
            return Err(CompileError::new(
                CompileErrorKind::TooManyLocals,
                "Too many parameters",
                span,
            ));
        }
        let locals = params
            .iter()
            .enumerate()
            .map(|(slot, param)| Local {
                name: param.clone(),
                slot: slot as u8,
            })
            .collect();
        let saved = std::mem::replace(&mut self.scope, Some(FunctionScope { locals }));

        for stmt in body {
            self.compile_stmt(stmt)?;
        }
        // Implicit `return 0` for bodies that fall off the end.
        self.emit_constant(0, span)?;
        self.chunk.write_op(OpCode::Return);

        self.scope = saved;
        self.patch_jump(skip_jump, span)
    }

    /// Emits a `return` statement; a bare `return` yields 0.
    fn compile_return(&mut self, value: Option<&Expr>, span: Span) -> Result<(), CompileError> {
        match value {
            Some(expr) => self.compile_expr(expr)?,
            None => self.emit_constant(0, span)?,
        }
        self.chunk.write_op(OpCode::Return);
        Ok(())
    }
}
