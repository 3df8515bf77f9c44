//! Statement nodes for the ccb AST.

use crate::token::Span;

use super::expr::Expr;

/// The kind of a statement in the ccb language.
#[derive(Debug, Clone)]
pub enum StmtKind {
    /// An expression statement.
    ///
    /// Evaluates the expression and discards its value.
    Expr(Expr),

    /// A variable definition with `let`.
    ///
    /// At top level the name is the fully-qualified form (namespace
    /// prefixes applied by the parser); inside a function it names a new
    /// local slot.
    Let {
        /// The name being defined.
        name: String,
        /// The initializer expression.
        value: Expr,
    },

    /// A while loop statement.
    While {
        /// The loop condition; zero is false.
        condition: Expr,
        /// Statements executed for each iteration.
        body: Vec<Stmt>,
    },

    /// Prints a value followed by a newline.
    Out(Expr),

    /// Reads one integer from standard input into a variable.
    ///
    /// Like `let`, the name is fully qualified at top level and a local
    /// name inside a function. Inside a function the local must already
    /// exist; that is checked at compile time.
    In {
        /// The target variable name.
        name: String,
    },

    /// A braced sequence of statements.
    ///
    /// `ns` blocks lower to this after the parser has applied their name
    /// qualification; namespaces have no runtime existence.
    Block(Vec<Stmt>),

    /// A function definition.
    Function {
        /// The fully-qualified function name.
        name: String,
        /// Parameter names, in declaration order.
        params: Vec<String>,
        /// The declared return type name. Accepted and stored but not
        /// enforced; defaults to `int` when no `->` clause is present.
        return_type: String,
        /// The function body.
        body: Vec<Stmt>,
    },

    /// A return statement.
    ///
    /// `return` without a value is represented as `None` and returns 0.
    Return(Option<Expr>),
}

/// A statement in the ccb language with source location.
#[derive(Debug, Clone)]
pub struct Stmt {
    /// The kind of statement.
    pub kind: StmtKind,
    /// The source location of this statement.
    pub span: Span,
}

impl Stmt {
    /// Creates a new statement with the given kind and span.
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}
