//! Token recognition and reading for the lexer.
//!
//! This module provides the methods that read one token from the input:
//! punctuation and operators (with one-character lookahead for the
//! two-character forms), identifiers and keywords, and integer literals.

use super::Lexer;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Creates a single-character token and advances the lexer.
    fn single_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, span)
    }

    /// Creates a two-character token, consuming both characters.
    fn two_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, span)
    }

    /// Reads the next token from the input.
    ///
    /// Assumes whitespace and comments have already been skipped and that
    /// at least one character remains. Characters that start no known
    /// token become [`TokenKind::Illegal`].
    pub(super) fn scan_token(&mut self) -> Token {
        // skip_whitespace_and_comments() leaves us on a character
        let c = self
            .current_char()
            .expect("scan_token called at end of input");

        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        match c {
            '=' => {
                if self.peek_char() == Some('=') {
                    self.two_char_token(TokenKind::Equal, start_pos, start_line, start_column)
                } else {
                    self.single_char_token(TokenKind::Assign, start_pos, start_line, start_column)
                }
            }
            '!' => {
                if self.peek_char() == Some('=') {
                    self.two_char_token(TokenKind::NotEqual, start_pos, start_line, start_column)
                } else {
                    // A lone '!' is not an operator in ccb.
                    self.single_char_token(
                        TokenKind::Illegal('!'),
                        start_pos,
                        start_line,
                        start_column,
                    )
                }
            }
            '<' => {
                if self.peek_char() == Some('=') {
                    self.two_char_token(TokenKind::LessEqual, start_pos, start_line, start_column)
                } else {
                    self.single_char_token(TokenKind::Less, start_pos, start_line, start_column)
                }
            }
            '>' => {
                if self.peek_char() == Some('=') {
                    self.two_char_token(
                        TokenKind::GreaterEqual,
                        start_pos,
                        start_line,
                        start_column,
                    )
                } else {
                    self.single_char_token(TokenKind::Greater, start_pos, start_line, start_column)
                }
            }
            '-' => {
                if self.peek_char() == Some('>') {
                    self.two_char_token(TokenKind::Arrow, start_pos, start_line, start_column)
                } else {
                    self.single_char_token(TokenKind::Minus, start_pos, start_line, start_column)
                }
            }
            '+' => self.single_char_token(TokenKind::Plus, start_pos, start_line, start_column),
            '*' => self.single_char_token(TokenKind::Asterisk, start_pos, start_line, start_column),
            '/' => self.single_char_token(TokenKind::Slash, start_pos, start_line, start_column),
            ';' => self.single_char_token(TokenKind::Semicolon, start_pos, start_line, start_column),
            ',' => self.single_char_token(TokenKind::Comma, start_pos, start_line, start_column),
            '.' => self.single_char_token(TokenKind::Dot, start_pos, start_line, start_column),
            '(' => self.single_char_token(TokenKind::LParen, start_pos, start_line, start_column),
            ')' => self.single_char_token(TokenKind::RParen, start_pos, start_line, start_column),
            '{' => self.single_char_token(TokenKind::LBrace, start_pos, start_line, start_column),
            '}' => self.single_char_token(TokenKind::RBrace, start_pos, start_line, start_column),
            _ if c.is_ascii_alphabetic() || c == '_' => {
                self.read_identifier(start_pos, start_line, start_column)
            }
            _ if c.is_ascii_digit() => self.read_number(start_pos, start_line, start_column),
            _ => self.single_char_token(
                TokenKind::Illegal(c),
                start_pos,
                start_line,
                start_column,
            ),
        }
    }

    /// Reads an identifier or keyword from the input.
    ///
    /// Identifiers consist of an ASCII alphabetic character or underscore
    /// followed by any number of ASCII alphanumeric characters or
    /// underscores. The lexeme is checked against the keyword table before
    /// an [`TokenKind::Ident`] token is produced.
    fn read_identifier(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let value = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);

        let kind = match value {
            "let" => TokenKind::Let,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "out" => TokenKind::Out,
            "in" => TokenKind::In,
            "ns" => TokenKind::Ns,
            "fn" => TokenKind::Fn,
            "return" => TokenKind::Return,
            _ => TokenKind::Ident(value.to_string()),
        };

        Token::new(kind, span)
    }

    /// Reads an integer literal from the input.
    ///
    /// Integer literals are one or more ASCII digits. The lexeme is kept
    /// as text; the parser converts it to a value and reports literals
    /// that do not fit the value domain.
    fn read_number(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let value = self.input[start_pos..self.pos].to_string();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::Int(value), span)
    }
}
