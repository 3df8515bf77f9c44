//! Unit tests for the lexer module.

use super::*;
use crate::token::TokenKind;

/// Helper function to tokenize input and return only the kinds.
pub(super) fn tokenize_kinds(input: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new(input);
    lexer.tokenize().into_iter().map(|t| t.kind).collect()
}

/// Helper to build an identifier kind without the `.to_string()` noise.
pub(super) fn ident(name: &str) -> TokenKind {
    TokenKind::Ident(name.to_string())
}

/// Helper to build an integer-literal kind.
pub(super) fn int(lexeme: &str) -> TokenKind {
    TokenKind::Int(lexeme.to_string())
}

mod operators;
