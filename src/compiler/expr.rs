//! Bytecode emission for expressions.

use super::{Compiler, UnresolvedCall, UNRESOLVED_MAX};
use super::error::{CompileError, CompileErrorKind};
use crate::ast::{Expr, ExprKind, InfixOp, Stmt};
use crate::bytecode::OpCode;
use crate::token::Span;

impl Compiler {
    /// Emits code for one expression, leaving its value on the stack.
    ///
    /// The exception is `if`, whose branch bodies are statements; used as
    /// an expression statement it pushes nothing, which is why the
    /// emitter for expression statements skips the balancing `POP` for it.
    pub(super) fn compile_expr(&mut self, expr: &Expr) -> Result<(), CompileError> {
        match &expr.kind {
            ExprKind::IntLiteral(value) => self.emit_constant(*value, expr.span),
            ExprKind::Identifier(name) => self.compile_name_read(name, expr.span),
            ExprKind::Infix { op, left, right } => {
                if *op == InfixOp::Assign {
                    self.compile_assignment(left, right)
                } else {
                    self.compile_expr(left)?;
                    self.compile_expr(right)?;
                    self.chunk.write_op(arithmetic_op(*op));
                    Ok(())
                }
            }
            ExprKind::If {
                condition,
                then_branch,
                else_branch,
            } => self.compile_if(condition, then_branch, else_branch.as_deref(), expr.span),
            ExprKind::Call { callee, args } => self.compile_call(callee, args, expr.span),
        }
    }

    /// Emits a read of a name: a local slot when one matches, otherwise
    /// the interned global.
    fn compile_name_read(&mut self, name: &str, span: Span) -> Result<(), CompileError> {
        if let Some(slot) = self.find_local(name) {
            self.chunk.write_op(OpCode::GetLocal);
            self.chunk.write_byte(slot);
        } else {
            let name_id = self.intern_global(name, span)?;
            self.chunk.write_op(OpCode::GetGlobal);
            self.chunk.write_byte(name_id);
        }
        Ok(())
    }

    /// Emits an assignment.
    ///
    /// The right-hand side is computed first; the store leaves the value
    /// on the stack, so the assignment has a value like any expression.
    fn compile_assignment(&mut self, target: &Expr, value: &Expr) -> Result<(), CompileError> {
        self.compile_expr(value)?;

        let ExprKind::Identifier(name) = &target.kind else {
            // The parser rejects non-name targets before we get here.
            return Err(CompileError::new(
                CompileErrorKind::Internal,
                "Assignment target is not a name. This is a compiler bug.",
                target.span,
            ));
        };

        if let Some(slot) = self.find_local(name) {
            self.chunk.write_op(OpCode::SetLocal);
            self.chunk.write_byte(slot);
        } else {
            let name_id = self.intern_global(name, target.span)?;
            self.chunk.write_op(OpCode::SetGlobal);
            self.chunk.write_byte(name_id);
        }
        Ok(())
    }

    /// Emits an `if` expression.
    ///
    /// `JUMP_IF_FALSE` pops the condition itself, so no balancing `POP`
    /// is emitted anywhere in the branch layout.
    fn compile_if(
        &mut self,
        condition: &Expr,
        then_branch: &[Stmt],
        else_branch: Option<&[Stmt]>,
        span: Span,
    ) -> Result<(), CompileError> {
        self.compile_expr(condition)?;

        let then_jump = self.emit_jump(OpCode::JumpIfFalse);
        for stmt in then_branch {
            self.compile_stmt(stmt)?;
        }

        let else_jump = self.emit_jump(OpCode::Jump);
        self.patch_jump(then_jump, span)?;

        if let Some(else_branch) = else_branch {
            for stmt in else_branch {
                self.compile_stmt(stmt)?;
            }
        }
        self.patch_jump(else_jump, span)
    }

    /// Emits a call.
    ///
    /// Arguments are pushed left to right. A call to a function that is
    /// already defined gets its entry offset inline; a forward reference
    /// gets a `0xffff` placeholder and a record in the unresolved list,
    /// drained at end of program.
    fn compile_call(
        &mut self,
        callee: &Expr,
        args: &[Expr],
        span: Span,
    ) -> Result<(), CompileError> {
        for arg in args {
            self.compile_expr(arg)?;
        }
        let argc = u8::try_from(args.len()).map_err(|_| {
            CompileError::new(
                CompileErrorKind::TooManyArguments,
                "Too many arguments in one call",
                span,
            )
        })?;

        let ExprKind::Identifier(name) = &callee.kind else {
            return Err(CompileError::new(
                CompileErrorKind::InvalidCallTarget,
                "Call target must be an identifier",
                callee.span,
            ));
        };

        self.chunk.write_op(OpCode::Call);
        let patch_pos = self.chunk.len();
        match self.find_function(name) {
            Some(offset) => {
                let target = u16::try_from(offset).map_err(|_| {
                    CompileError::new(
                        CompileErrorKind::JumpTooLarge,
                        format!("Entry of function '{}' is out of call range", name),
                        callee.span,
                    )
                })?;
                self.chunk.write_u16(target);
            }
            None => {
                if self.unresolved.len() >= UNRESOLVED_MAX {
                    return Err(CompileError::new(
                        CompileErrorKind::TooManyUnresolvedCalls,
                        "Too many unresolved calls",
                        callee.span,
                    ));
                }
                self.chunk.write_u16(0xffff);
                self.unresolved.push(UnresolvedCall {
                    name: name.clone(),
                    patch_pos,
                    span: callee.span,
                });
            }
        }
        self.chunk.write_byte(argc);
        Ok(())
    }
}

/// Maps a non-assignment infix operator to its opcode.
fn arithmetic_op(op: InfixOp) -> OpCode {
    match op {
        InfixOp::Add => OpCode::Add,
        InfixOp::Sub => OpCode::Subtract,
        InfixOp::Mul => OpCode::Multiply,
        InfixOp::Div => OpCode::Divide,
        InfixOp::Less => OpCode::Less,
        InfixOp::Greater => OpCode::Greater,
        InfixOp::LessEqual => OpCode::LessEqual,
        InfixOp::GreaterEqual => OpCode::GreaterEqual,
        InfixOp::Equal => OpCode::Equal,
        InfixOp::NotEqual => OpCode::NotEqual,
        InfixOp::Assign => unreachable!("assignment is emitted separately"),
    }
}
