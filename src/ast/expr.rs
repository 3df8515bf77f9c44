//! Expression nodes for the ccb AST.

use crate::token::Span;

use super::stmt::Stmt;

/// An infix operator.
///
/// Assignment is an infix operator here as well: `x = 5` parses to an
/// [`ExprKind::Infix`] node with [`InfixOp::Assign`], whose left operand
/// the parser guarantees to be an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOp {
    /// `=`
    Assign,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/` (truncating integer division)
    Div,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
}

impl InfixOp {
    /// Returns the operator as it appears in source.
    pub fn symbol(self) -> &'static str {
        match self {
            InfixOp::Assign => "=",
            InfixOp::Add => "+",
            InfixOp::Sub => "-",
            InfixOp::Mul => "*",
            InfixOp::Div => "/",
            InfixOp::Less => "<",
            InfixOp::Greater => ">",
            InfixOp::LessEqual => "<=",
            InfixOp::GreaterEqual => ">=",
            InfixOp::Equal => "==",
            InfixOp::NotEqual => "!=",
        }
    }
}

/// The kind of an expression in the ccb language.
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// An integer literal value.
    IntLiteral(i64),

    /// A name reference.
    ///
    /// Dotted references like `math.sq` are collapsed by the parser into a
    /// single identifier string containing the dots.
    Identifier(String),

    /// An infix operation, including assignment.
    Infix {
        /// The operator.
        op: InfixOp,
        /// The left operand. For [`InfixOp::Assign`] this is always an
        /// identifier.
        left: Box<Expr>,
        /// The right operand.
        right: Box<Expr>,
    },

    /// A conditional expression with optional `else` branch.
    ///
    /// `if` is an expression in ccb; used as a statement it contributes
    /// nothing to the stack because its branch bodies are statements.
    If {
        /// The condition; zero is false, everything else is true.
        condition: Box<Expr>,
        /// Statements executed when the condition is true.
        then_branch: Vec<Stmt>,
        /// Optional statements executed when the condition is false.
        else_branch: Option<Vec<Stmt>>,
    },

    /// A function call.
    ///
    /// The callee is stored as an expression, but anything other than an
    /// identifier is rejected when bytecode is emitted; ccb has no
    /// first-class functions.
    Call {
        /// The expression in call position.
        callee: Box<Expr>,
        /// The arguments, in source order.
        args: Vec<Expr>,
    },
}

/// An expression in the ccb language with source location.
#[derive(Debug, Clone)]
pub struct Expr {
    /// The kind of expression.
    pub kind: ExprKind,
    /// The source location of this expression.
    pub span: Span,
}

impl Expr {
    /// Creates a new expression with the given kind and span.
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}
