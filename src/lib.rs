//! The ccb language toolchain library.
//!
//! ccb is a small imperative language: integer arithmetic, comparisons,
//! assignment, `if`/`else`, `while`, console `in`/`out`, functions with
//! parameters and return values, and lexical `ns` namespaces that
//! qualify top-level names. Source text is lexed, parsed to an AST,
//! compiled to bytecode in a single pass, and executed on a stack VM.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`parser`] - Pratt parser with namespace-aware name resolution
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`bytecode`] - Opcodes, chunks, and the disassembler
//! - [`compiler`] - Single-pass bytecode emission with forward patching
//! - [`vm`] - The stack-based virtual machine
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use ccb::compiler;
//! use ccb::lexer::Lexer;
//! use ccb::parser::Parser;
//! use ccb::vm::Vm;
//!
//! let source = "out 1 + 2 * 3;";
//!
//! let tokens = Lexer::new(source).tokenize();
//! let mut parser = Parser::new(tokens);
//! let program = parser.parse();
//! assert!(parser.errors().is_empty());
//!
//! let chunk = compiler::compile(&program).expect("compile error");
//!
//! let mut output = Vec::new();
//! let mut vm = Vm::new(&chunk);
//! vm.run(&mut Cursor::new(Vec::new()), &mut output)
//!     .expect("runtime error");
//! assert_eq!(output, b"7\n");
//! ```

pub mod ast;
pub mod bytecode;
pub mod compiler;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod vm;
