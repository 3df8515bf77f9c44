//! Lexical analyzer for the ccb language.
//!
//! This module provides the [`Lexer`] struct which converts source code
//! text into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer scans the input character by character with one character of
//! lookahead. It recognizes identifiers, keywords, integer literals, and
//! punctuation, skips whitespace and `//` line comments, and tracks source
//! positions for error reporting.
//!
//! The lexer itself never fails: a character it cannot classify becomes a
//! [`TokenKind::Illegal`] token, and the parser reports it against the
//! statement that contains it. A lone `!` that is not part of `!=` is
//! illegal the same way.
//!
//! # Supported Tokens
//!
//! - **Keywords**: `let`, `if`, `else`, `while`, `out`, `in`, `ns`, `fn`,
//!   `return`
//! - **Identifiers**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **Integer literals**: `[0-9]+` (non-negative decimal; the lexeme is
//!   carried as text and converted by the parser)
//! - **Punctuation**: `= == != < > <= >= + - * / ; , . ( ) { } ->`
//! - **Comments**: `//` to end of line, skipped
//!
//! # Module Structure
//!
//! - [`cursor`] - Position tracking and character navigation
//! - [`skip`] - Whitespace and comment handling
//! - [`scan`] - Token recognition and reading
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod scan;
mod skip;

#[cfg(test)]
mod tests;

use crate::token::{Span, Token, TokenKind};

/// A lexical analyzer that tokenizes ccb source code.
///
/// The `Lexer` maintains its position within the input and tracks
/// line/column numbers for error reporting. Tokens are produced on
/// demand by [`next_token`](Lexer::next_token); [`tokenize`](Lexer::tokenize)
/// drains the input in one call.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Reads and returns the next token from the input.
    ///
    /// Whitespace and comments before the token are skipped. Once the end
    /// of input is reached this returns [`TokenKind::Eof`] tokens forever.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        if self.is_eof() {
            let span = Span::new(self.pos, self.pos, self.line, self.column);
            return Token::new(TokenKind::Eof, span);
        }

        self.scan_token()
    }

    /// Tokenizes the entire input and returns a vector of tokens.
    ///
    /// The returned vector always ends with exactly one
    /// [`TokenKind::Eof`] token, so it is never empty.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }
}
