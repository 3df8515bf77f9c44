//! Statement parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Stmt, StmtKind};
use crate::token::{Span, TokenKind};

impl Parser {
    /// Parses a single statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// stmt → let_stmt | while_stmt | out_stmt | in_stmt | ns_block
    ///      | fn_def | return_stmt | expr_stmt
    /// ```
    pub(super) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.current_kind() {
            TokenKind::Let => self.parse_let_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::Out => self.parse_out_stmt(),
            TokenKind::In => self.parse_in_stmt(),
            TokenKind::Ns => self.parse_ns_block(),
            TokenKind::Fn => self.parse_fn_def(),
            TokenKind::Return => self.parse_return_stmt(),
            _ => self.parse_expr_stmt(),
        }
    }

    /// Parses a let statement.
    ///
    /// At top level the defined name is qualified with the namespace
    /// prefix; inside a function it stays as written (it names a local).
    ///
    /// # Grammar
    ///
    /// ```text
    /// let_stmt → "let" IDENT "=" expr ";"?
    /// ```
    pub(super) fn parse_let_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Let)?;

        let name = self.expect_identifier()?;
        let name = if self.fn_depth > 0 {
            name
        } else {
            self.qualify(&name)
        };

        self.expect(&TokenKind::Assign)?;
        let value = self.parse_expr()?;
        self.eat_semicolon();

        let span = Span::new(
            start_span.start,
            value.span.end,
            start_span.line,
            start_span.column,
        );
        Ok(Stmt::new(StmtKind::Let { name, value }, span))
    }

    /// Parses a while statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// while_stmt → "while" "(" expr ")" "{" stmt* "}"
    /// ```
    pub(super) fn parse_while_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::While)?;

        self.expect(&TokenKind::LParen)?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RParen)?;

        let (body, end) = self.parse_block()?;

        let span = Span::new(start_span.start, end, start_span.line, start_span.column);
        Ok(Stmt::new(StmtKind::While { condition, body }, span))
    }

    /// Parses an out statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// out_stmt → "out" expr ";"?
    /// ```
    pub(super) fn parse_out_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Out)?;

        let value = self.parse_expr()?;
        self.eat_semicolon();

        let span = Span::new(
            start_span.start,
            value.span.end,
            start_span.line,
            start_span.column,
        );
        Ok(Stmt::new(StmtKind::Out(value), span))
    }

    /// Parses an in statement.
    ///
    /// The target name qualifies like `let`: namespace-prefixed at top
    /// level, as written inside a function.
    ///
    /// # Grammar
    ///
    /// ```text
    /// in_stmt → "in" IDENT ";"?
    /// ```
    pub(super) fn parse_in_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::In)?;

        let name_span = self.current_span();
        let name = self.expect_identifier()?;
        let name = if self.fn_depth > 0 {
            name
        } else {
            self.qualify(&name)
        };
        self.eat_semicolon();

        let span = Span::new(
            start_span.start,
            name_span.end,
            start_span.line,
            start_span.column,
        );
        Ok(Stmt::new(StmtKind::In { name }, span))
    }

    /// Parses a namespace block.
    ///
    /// The block's statements are parsed with the namespace prefix
    /// extended by the block's name; the result is a plain
    /// [`StmtKind::Block`]. Namespaces exist only at parse time.
    ///
    /// # Grammar
    ///
    /// ```text
    /// ns_block → "ns" IDENT "{" stmt* "}"
    /// ```
    pub(super) fn parse_ns_block(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Ns)?;

        let name = self.expect_identifier()?;
        let extended = self.qualify(&name);

        let saved = std::mem::replace(&mut self.ns_prefix, extended);
        let result = self.parse_block();
        self.ns_prefix = saved;

        let (body, end) = result?;
        let span = Span::new(start_span.start, end, start_span.line, start_span.column);
        Ok(Stmt::new(StmtKind::Block(body), span))
    }

    /// Parses a return statement.
    ///
    /// # Grammar
    ///
    /// ```text
    /// return_stmt → "return" (";" | expr ";"?)
    /// ```
    pub(super) fn parse_return_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Return)?;

        // Bare return only when a semicolon follows directly.
        if matches!(self.current_kind(), TokenKind::Semicolon) {
            self.advance();
            return Ok(Stmt::new(StmtKind::Return(None), start_span));
        }

        let value = self.parse_expr()?;
        self.eat_semicolon();

        let span = Span::new(
            start_span.start,
            value.span.end,
            start_span.line,
            start_span.column,
        );
        Ok(Stmt::new(StmtKind::Return(Some(value)), span))
    }

    /// Parses an expression statement.
    pub(super) fn parse_expr_stmt(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expr()?;
        self.eat_semicolon();

        let span = expr.span;
        Ok(Stmt::new(StmtKind::Expr(expr), span))
    }

    /// Parses a braced statement sequence.
    ///
    /// Returns the statements and the byte offset just past the closing
    /// brace. A statement error inside the block is recorded and
    /// recovery resumes within the block; a missing closing brace at end
    /// of input is recorded as a diagnostic and the partial block is
    /// returned.
    pub(super) fn parse_block(&mut self) -> Result<(Vec<Stmt>, usize), ParseError> {
        self.expect(&TokenKind::LBrace)?;

        let mut body = Vec::new();
        while !matches!(self.current_kind(), TokenKind::RBrace) && !self.is_eof() {
            match self.parse_stmt() {
                Ok(stmt) => body.push(stmt),
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                }
            }
        }

        let end = self.current_span().end;
        if matches!(self.current_kind(), TokenKind::RBrace) {
            self.advance();
        } else {
            self.errors.push(ParseError::unclosed_block(self.current_span()));
        }

        Ok((body, end))
    }
}
