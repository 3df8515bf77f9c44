//! Unit tests for parsing.
//!
//! Tests are organized by parser component:
//! - [`expr`]: Pratt expression parsing, precedence, calls, qualified names
//! - [`stmt`]: Statement parsing
//! - [`fn_def`]: Function definitions
//! - [`ns`]: Namespace blocks and name qualification
//! - [`errors`]: Error detection and recovery

use super::*;
use crate::ast::{Expr, ExprKind, InfixOp, Stmt, StmtKind};
use crate::lexer::Lexer;


/// Parses input and returns the program, asserting no errors occurred.
pub(super) fn parse_program(input: &str) -> Program {
    let tokens = Lexer::new(input).tokenize();
    let mut parser = Parser::new(tokens);
    let program = parser.parse();
    assert!(
        parser.errors().is_empty(),
        "Unexpected parse errors for {:?}: {}",
        input,
        parser
            .errors()
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    );
    program
}

/// Parses input and returns the collected diagnostics.
pub(super) fn parse_errors(input: &str) -> Vec<ParseError> {
    let tokens = Lexer::new(input).tokenize();
    let mut parser = Parser::new(tokens);
    parser.parse();
    let mut errors = Vec::new();
    std::mem::swap(&mut errors, &mut parser.errors);
    errors
}

/// Parses input whose first statement is an expression statement and
/// returns that expression.
pub(super) fn parse_first_expr(input: &str) -> Expr {
    let program = parse_program(input);
    let first = program
        .statements
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("Input {:?} produced no statements", input));
    match first.kind {
        StmtKind::Expr(expr) => expr,
        other => panic!("Expected expression statement, got {:?}", other),
    }
}

/// Renders an expression back to a parenthesized string for precedence
/// assertions.
pub(super) fn render(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::IntLiteral(n) => n.to_string(),
        ExprKind::Identifier(name) => name.clone(),
        ExprKind::Infix { op, left, right } => {
            format!("({} {} {})", render(left), op.symbol(), render(right))
        }
        ExprKind::Call { callee, args } => {
            let args = args.iter().map(render).collect::<Vec<_>>().join(", ");
            format!("{}({})", render(callee), args)
        }
        ExprKind::If { .. } => "<if>".to_string(),
    }
}
