//! Top-level program structure for the ccb AST.

use super::stmt::Stmt;

/// The root node of a ccb program's AST.
///
/// A program is a sequence of top-level statements; there is no required
/// entry point. Execution starts at the first statement and function
/// bodies are skipped until called.
#[derive(Debug)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Stmt>,
}
