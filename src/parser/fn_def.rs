//! Function definition parsing.

use super::Parser;
use super::error::ParseError;
use crate::ast::{Stmt, StmtKind};
use crate::token::{Span, TokenKind};

/// The return type recorded when a definition has no `->` clause.
const DEFAULT_RETURN_TYPE: &str = "int";

impl Parser {
    /// Parses a function definition.
    ///
    /// The function's name is always qualified with the namespace prefix
    /// of the enclosing `ns` blocks. Parameters and the body parse with
    /// the function depth raised, so names defined inside are locals and
    /// stay unqualified.
    ///
    /// The `-> TYPE` clause is accepted and stored but not enforced; when
    /// absent the return type defaults to `int`.
    ///
    /// # Grammar
    ///
    /// ```text
    /// fn_def → "fn" IDENT "(" (IDENT ("," IDENT)*)? ")" ("->" IDENT)? "{" stmt* "}"
    /// ```
    pub(super) fn parse_fn_def(&mut self) -> Result<Stmt, ParseError> {
        let start_span = self.current_span();
        self.expect(&TokenKind::Fn)?;

        let name = self.expect_identifier()?;
        let name = self.qualify(&name);

        self.expect(&TokenKind::LParen)?;
        let params = self.parse_params()?;
        self.expect(&TokenKind::RParen)?;

        let return_type = if matches!(self.current_kind(), TokenKind::Arrow) {
            self.advance();
            self.expect_identifier()?
        } else {
            DEFAULT_RETURN_TYPE.to_string()
        };

        self.fn_depth += 1;
        let result = self.parse_block();
        self.fn_depth -= 1;

        let (body, end) = result?;
        let span = Span::new(start_span.start, end, start_span.line, start_span.column);
        Ok(Stmt::new(
            StmtKind::Function {
                name,
                params,
                return_type,
                body,
            },
            span,
        ))
    }

    /// Parses a comma-separated, possibly empty parameter list.
    ///
    /// The caller handles both parentheses.
    fn parse_params(&mut self) -> Result<Vec<String>, ParseError> {
        let mut params = Vec::new();

        if matches!(self.current_kind(), TokenKind::RParen) {
            return Ok(params);
        }

        params.push(self.expect_identifier()?);
        while matches!(self.current_kind(), TokenKind::Comma) {
            self.advance();
            params.push(self.expect_identifier()?);
        }

        Ok(params)
    }
}
