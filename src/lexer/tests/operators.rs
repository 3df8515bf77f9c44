//! Tests for punctuation, single- and two-character operators.

use super::*;

#[test]
fn test_empty_input() {
    let kinds = tokenize_kinds("");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_whitespace_only() {
    let kinds = tokenize_kinds("   \n\t");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_single_char_punctuation() {
    let kinds = tokenize_kinds("= + - * / ; , . ( ) { }");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_two_char_operators() {
    let kinds = tokenize_kinds("== != <= >= ->");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Equal,
            TokenKind::NotEqual,
            TokenKind::LessEqual,
            TokenKind::GreaterEqual,
            TokenKind::Arrow,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comparison_without_equals() {
    let kinds = tokenize_kinds("< >");
    assert_eq!(
        kinds,
        vec![TokenKind::Less, TokenKind::Greater, TokenKind::Eof]
    );
}

#[test]
fn test_equal_vs_assign_adjacent() {
    // `===` must lex as `==` then `=`.
    let kinds = tokenize_kinds("===");
    assert_eq!(
        kinds,
        vec![TokenKind::Equal, TokenKind::Assign, TokenKind::Eof]
    );
}

#[test]
fn test_minus_not_followed_by_greater_is_minus() {
    let kinds = tokenize_kinds("a - b");
    assert_eq!(
        kinds,
        vec![ident("a"), TokenKind::Minus, ident("b"), TokenKind::Eof]
    );
}

#[test]
fn test_arrow_between_tokens() {
    let kinds = tokenize_kinds(") -> int");
    assert_eq!(
        kinds,
        vec![
            TokenKind::RParen,
            TokenKind::Arrow,
            ident("int"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lone_bang_is_illegal() {
    let kinds = tokenize_kinds("!");
    assert_eq!(kinds, vec![TokenKind::Illegal('!'), TokenKind::Eof]);
}

#[test]
fn test_bang_equal_is_not_equal() {
    let kinds = tokenize_kinds("a != b");
    assert_eq!(
        kinds,
        vec![ident("a"), TokenKind::NotEqual, ident("b"), TokenKind::Eof]
    );
}

#[test]
fn test_unclassified_character_is_illegal() {
    let kinds = tokenize_kinds("let x @ 1");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            ident("x"),
            TokenKind::Illegal('@'),
            int("1"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lexing_continues_after_illegal_character() {
    let kinds = tokenize_kinds("# out");
    assert_eq!(
        kinds,
        vec![TokenKind::Illegal('#'), TokenKind::Out, TokenKind::Eof]
    );
}
