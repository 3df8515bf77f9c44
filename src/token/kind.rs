//! Token kinds for the ccb lexer.

/// The kind of token recognized by the lexer.
///
/// Identifiers and integer literals carry their source lexeme; every
/// other kind is fully described by its variant. Integer literals are
/// kept as text here and converted to a value by the parser, which is
/// where an out-of-range literal is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier: `[A-Za-z_][A-Za-z0-9_]*`.
    Ident(String),

    /// A non-negative decimal integer literal: `[0-9]+`.
    Int(String),

    /// The `let` keyword for variable definitions.
    Let,

    /// The `if` keyword for conditional expressions.
    If,

    /// The `else` keyword for the alternate conditional branch.
    Else,

    /// The `while` keyword for loop statements.
    While,

    /// The `out` keyword for printing a value.
    Out,

    /// The `in` keyword for reading a value from standard input.
    In,

    /// The `ns` keyword opening a namespace block.
    Ns,

    /// The `fn` keyword for function definitions.
    Fn,

    /// The `return` keyword for returning from functions.
    Return,

    /// An equals sign `=` for assignment.
    Assign,

    /// Double equals `==` for equality comparison.
    Equal,

    /// Not equals `!=` for inequality comparison.
    NotEqual,

    /// Less than `<`.
    Less,

    /// Greater than `>`.
    Greater,

    /// Less than or equal `<=`.
    LessEqual,

    /// Greater than or equal `>=`.
    GreaterEqual,

    /// A plus sign `+` for addition.
    Plus,

    /// A minus sign `-` for subtraction.
    Minus,

    /// An asterisk `*` for multiplication.
    Asterisk,

    /// A forward slash `/` for division.
    Slash,

    /// A semicolon `;`, the optional statement terminator.
    Semicolon,

    /// A comma `,` separating parameters and arguments.
    Comma,

    /// A dot `.` joining the segments of a qualified name.
    Dot,

    /// A left parenthesis `(`.
    LParen,

    /// A right parenthesis `)`.
    RParen,

    /// A left brace `{`.
    LBrace,

    /// A right brace `}`.
    RBrace,

    /// An arrow `->` introducing a function's return type.
    Arrow,

    /// A character the lexer could not classify.
    ///
    /// The lexer never fails; it hands illegal input to the parser as a
    /// token so the error is reported against the statement containing it.
    Illegal(char),

    /// End of input marker.
    ///
    /// The lexer always appends this as the final token, ensuring the
    /// token vector is never empty.
    Eof,
}
