//! Parser helper methods for token navigation and basic operations.

use super::Parser;
use super::error::ParseError;
use crate::token::{Span, Token, TokenKind};

impl Parser {
    /// Returns a user-friendly display string for a token kind.
    pub(super) fn token_kind_display(kind: &TokenKind) -> String {
        match kind {
            TokenKind::Ident(s) => format!("identifier '{}'", s),
            TokenKind::Int(n) => format!("integer '{}'", n),
            TokenKind::Let => "'let' keyword".to_string(),
            TokenKind::If => "'if' keyword".to_string(),
            TokenKind::Else => "'else' keyword".to_string(),
            TokenKind::While => "'while' keyword".to_string(),
            TokenKind::Out => "'out' keyword".to_string(),
            TokenKind::In => "'in' keyword".to_string(),
            TokenKind::Ns => "'ns' keyword".to_string(),
            TokenKind::Fn => "'fn' keyword".to_string(),
            TokenKind::Return => "'return' keyword".to_string(),
            TokenKind::Assign => "'='".to_string(),
            TokenKind::Equal => "'=='".to_string(),
            TokenKind::NotEqual => "'!='".to_string(),
            TokenKind::Less => "'<'".to_string(),
            TokenKind::Greater => "'>'".to_string(),
            TokenKind::LessEqual => "'<='".to_string(),
            TokenKind::GreaterEqual => "'>='".to_string(),
            TokenKind::Plus => "'+'".to_string(),
            TokenKind::Minus => "'-'".to_string(),
            TokenKind::Asterisk => "'*'".to_string(),
            TokenKind::Slash => "'/'".to_string(),
            TokenKind::Semicolon => "';'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Dot => "'.'".to_string(),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::LBrace => "'{'".to_string(),
            TokenKind::RBrace => "'}'".to_string(),
            TokenKind::Arrow => "'->'".to_string(),
            TokenKind::Illegal(c) => format!("illegal character '{}'", c),
            TokenKind::Eof => "end of file".to_string(),
        }
    }

    /// Returns a reference to the current token.
    ///
    /// Safe to call at any time; past the end it returns the final `Eof`
    /// token, which `new()` guarantees is present.
    pub(super) fn current(&self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the kind of the current token.
    pub(super) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Returns the span of the current token.
    pub(super) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Advances to the next token.
    ///
    /// Does nothing if already at `Eof`.
    pub(super) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Expects the current token to match `expected` and advances.
    ///
    /// An illegal character in expected-token position is reported as a
    /// lexer error rather than a mismatch, so the user sees the real
    /// problem.
    pub(super) fn expect(&mut self, expected: &TokenKind) -> Result<(), ParseError> {
        if let TokenKind::Illegal(c) = *self.current_kind() {
            return Err(ParseError::illegal_character(c, self.current_span()));
        }
        if self.current_kind() == expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::unexpected_token(
                &Self::token_kind_display(expected),
                &Self::token_kind_display(self.current_kind()),
                self.current_span(),
            ))
        }
    }

    /// Expects an identifier token and returns its name.
    pub(super) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if let TokenKind::Illegal(c) = *self.current_kind() {
            return Err(ParseError::illegal_character(c, self.current_span()));
        }
        if let TokenKind::Ident(name) = self.current_kind() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(ParseError::unexpected_token(
                "identifier",
                &Self::token_kind_display(self.current_kind()),
                self.current_span(),
            ))
        }
    }

    /// Consumes a trailing semicolon if one is present.
    ///
    /// Semicolons are optional at the end of statements.
    pub(super) fn eat_semicolon(&mut self) {
        if matches!(self.current_kind(), TokenKind::Semicolon) {
            self.advance();
        }
    }

    /// Joins `name` onto the current namespace prefix.
    ///
    /// Returns the name unchanged when no `ns` block is open.
    pub(super) fn qualify(&self, name: &str) -> String {
        if self.ns_prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.ns_prefix, name)
        }
    }

    /// Skips ahead to the next statement boundary after an error.
    ///
    /// Consumes at least one token (so parsing always makes progress),
    /// then stops just past a `;`, or just before a statement-head
    /// keyword, a `}`, or end of input.
    pub(super) fn synchronize(&mut self) {
        let mut advanced = false;
        while !self.is_eof() {
            match self.current_kind() {
                TokenKind::Semicolon => {
                    self.advance();
                    return;
                }
                TokenKind::Let
                | TokenKind::While
                | TokenKind::Out
                | TokenKind::In
                | TokenKind::Ns
                | TokenKind::Fn
                | TokenKind::Return
                | TokenKind::RBrace
                    if advanced =>
                {
                    return;
                }
                _ => {
                    self.advance();
                    advanced = true;
                }
            }
        }
    }
}
