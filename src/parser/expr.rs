//! Expression parsing using Pratt parsing (top-down operator precedence).
//!
//! Prefix positions accept integer literals, identifiers (with dotted
//! continuation into qualified names), and `if` expressions. Infix
//! operators are consumed while the next token binds tighter than the
//! caller's precedence; a `(` after any expression is a call postfix and
//! always binds.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Expr, ExprKind, InfixOp};
use crate::token::{Span, TokenKind};

/// Operator precedence levels, loosest first.
///
/// The expression loop keeps consuming infix operators while the next
/// token's level is strictly higher than the caller's. Calls are not
/// listed: a `(` postfix always binds tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Precedence {
    Lowest,
    /// `=`
    Assignment,
    /// `<` `>`
    LessGreater,
    /// `<=` `>=`
    Comparison,
    /// `==` `!=`
    Equality,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
}

/// Returns the precedence and operator for an infix token, if it is one.
fn infix_op(kind: &TokenKind) -> Option<(Precedence, InfixOp)> {
    match kind {
        TokenKind::Assign => Some((Precedence::Assignment, InfixOp::Assign)),
        TokenKind::Less => Some((Precedence::LessGreater, InfixOp::Less)),
        TokenKind::Greater => Some((Precedence::LessGreater, InfixOp::Greater)),
        TokenKind::LessEqual => Some((Precedence::Comparison, InfixOp::LessEqual)),
        TokenKind::GreaterEqual => Some((Precedence::Comparison, InfixOp::GreaterEqual)),
        TokenKind::Equal => Some((Precedence::Equality, InfixOp::Equal)),
        TokenKind::NotEqual => Some((Precedence::Equality, InfixOp::NotEqual)),
        TokenKind::Plus => Some((Precedence::Sum, InfixOp::Add)),
        TokenKind::Minus => Some((Precedence::Sum, InfixOp::Sub)),
        TokenKind::Asterisk => Some((Precedence::Product, InfixOp::Mul)),
        TokenKind::Slash => Some((Precedence::Product, InfixOp::Div)),
        _ => None,
    }
}

impl Parser {
    /// Parses an expression.
    ///
    /// This is the entry point used by the statement parsers.
    pub(super) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_expr_at(Precedence::Lowest)
    }

    /// Parses an expression at the given minimum precedence.
    ///
    /// 1. Parse a prefix expression.
    /// 2. While a `(` follows, wrap the expression as a call.
    /// 3. While the next token is an infix operator binding strictly
    ///    tighter than `min`, consume it and parse its right operand.
    ///
    /// Binary operators parse their right side at their own level, which
    /// makes them left-associative. Assignment also recurses at its own
    /// level; a chained `a = b = c` therefore reaches the second `=` with
    /// `a = b` on the left and reports an invalid assignment target.
    fn parse_expr_at(&mut self, min: Precedence) -> Result<Expr, ParseError> {
        let mut left = self.parse_prefix()?;

        loop {
            if matches!(self.current_kind(), TokenKind::LParen) {
                left = self.parse_call(left)?;
                continue;
            }

            let Some((precedence, op)) = infix_op(self.current_kind()) else {
                break;
            };
            if min >= precedence {
                break;
            }

            let op_span = self.current_span();
            self.advance();

            if op == InfixOp::Assign && !matches!(left.kind, ExprKind::Identifier(_)) {
                return Err(ParseError::invalid_assignment_target(op_span));
            }

            let right = self.parse_expr_at(precedence)?;
            let span = Span::new(
                left.span.start,
                right.span.end,
                left.span.line,
                left.span.column,
            );
            left = Expr::new(
                ExprKind::Infix {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    /// Parses a prefix expression.
    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current_span();

        match self.current_kind() {
            TokenKind::Int(lexeme) => {
                let value: i64 = lexeme
                    .parse()
                    .map_err(|_| ParseError::integer_out_of_range(lexeme, start_span))?;
                self.advance();
                Ok(Expr::new(ExprKind::IntLiteral(value), start_span))
            }
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                self.parse_qualified_name(name, start_span)
            }
            TokenKind::If => self.parse_if_expr(),
            TokenKind::Illegal(c) => {
                Err(ParseError::illegal_character(*c, start_span))
            }
            kind => Err(ParseError::expected_expression(
                &Self::token_kind_display(kind),
                start_span,
            )),
        }
    }

    /// Extends a just-parsed identifier with `.IDENT` continuations.
    ///
    /// Each dot appends another segment; the result stays a single
    /// [`ExprKind::Identifier`] holding the qualified name. This is the
    /// use side of namespacing; the definition side is `ns`.
    fn parse_qualified_name(&mut self, first: String, start_span: Span) -> Result<Expr, ParseError> {
        let mut full = first;
        let mut end = start_span.end;

        while matches!(self.current_kind(), TokenKind::Dot) {
            self.advance();
            let segment_span = self.current_span();
            let segment = self.expect_identifier()?;
            full.push('.');
            full.push_str(&segment);
            end = segment_span.end;
        }

        let span = Span::new(start_span.start, end, start_span.line, start_span.column);
        Ok(Expr::new(ExprKind::Identifier(full), span))
    }

    /// Parses an if expression.
    ///
    /// The `else` branch, when present, must be a block; `else if` chains
    /// are not part of the language.
    ///
    /// # Grammar
    ///
    /// ```text
    /// if_expr → "if" "(" expr ")" "{" stmt* "}" ("else" "{" stmt* "}")?
    /// ```
    fn parse_if_expr(&mut self) -> Result<Expr, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::If)?;

        self.expect(&TokenKind::LParen)?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;

        let (then_branch, mut end) = self.parse_block()?;

        let else_branch = if matches!(self.current_kind(), TokenKind::Else) {
            self.advance();
            let (body, else_end) = self.parse_block()?;
            end = else_end;
            Some(body)
        } else {
            None
        };

        let span = Span::new(start_span.start, end, start_span.line, start_span.column);
        Ok(Expr::new(
            ExprKind::If {
                condition: Box::new(condition),
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    /// Parses a call postfix.
    ///
    /// The callee expression has already been parsed and the current
    /// token is `(`. Any expression is accepted in call position here;
    /// the compiler rejects non-identifier callees.
    ///
    /// # Grammar
    ///
    /// ```text
    /// call → expr "(" (expr ("," expr)*)? ")"
    /// ```
    fn parse_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LParen)?;

        let mut args = Vec::new();
        if !matches!(self.current_kind(), TokenKind::RParen) {
            args.push(self.parse_expr()?);
            while matches!(self.current_kind(), TokenKind::Comma) {
                self.advance();
                args.push(self.parse_expr()?);
            }
        }

        let end_span = self.current_span();
        self.expect(&TokenKind::RParen)?;

        let span = Span::new(
            callee.span.start,
            end_span.end,
            callee.span.line,
            callee.span.column,
        );
        Ok(Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                args,
            },
            span,
        ))
    }
}
