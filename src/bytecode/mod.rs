//! The bytecode data model shared by the compiler and the VM.
//!
//! This module defines the runtime [`Value`] type, the [`OpCode`] set,
//! and the [`Chunk`] that pairs a flat byte stream with its constant
//! pool. The [`debug`] submodule renders chunks as human-readable
//! disassembly.
//!
//! # See Also
//!
//! * [`crate::compiler`] - Produces chunks from the AST
//! * [`crate::vm`] - Executes chunks

mod chunk;
mod opcode;

pub mod debug;

pub use chunk::Chunk;
pub use opcode::OpCode;

/// The runtime value type. ccb computes exclusively with integers.
pub type Value = i64;
