//! Runtime error types.

/// The kind of runtime error, for structured matching in tests and tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// The value stack outgrew its fixed depth.
    StackOverflow,
    /// More frames were pushed than the call stack holds.
    CallStackOverflow,
    /// The instruction pointer landed on a byte that is not an opcode.
    UnknownOpcode,
    /// The right operand of `/` was zero (or the quotient overflows).
    DivisionByZero,
    /// The chunk is malformed: a truncated operand, a bad constant
    /// index, or a stack operation with nothing to operate on. Chunks
    /// produced by the compiler never trigger this.
    CorruptChunk,
    /// Reading input or writing output failed.
    Io,
}

/// An error that occurred while executing a chunk.
///
/// All runtime errors are fatal; the VM stops and the driver exits with
/// the runtime-error code.
#[derive(Debug)]
pub struct RuntimeError {
    /// A human-readable description of the error.
    message: String,
    /// The kind of error, for structured error handling.
    kind: RuntimeErrorKind,
}

impl RuntimeError {
    pub(super) fn new(kind: RuntimeErrorKind, message: impl Into<String>) -> Self {
        RuntimeError {
            message: message.into(),
            kind,
        }
    }

    pub(super) fn stack_overflow() -> Self {
        Self::new(RuntimeErrorKind::StackOverflow, "Stack overflow")
    }

    pub(super) fn call_stack_overflow() -> Self {
        Self::new(RuntimeErrorKind::CallStackOverflow, "Call stack overflow")
    }

    pub(super) fn unknown_opcode(byte: u8) -> Self {
        Self::new(
            RuntimeErrorKind::UnknownOpcode,
            format!("Unknown opcode {}", byte),
        )
    }

    pub(super) fn division_by_zero() -> Self {
        Self::new(RuntimeErrorKind::DivisionByZero, "Division by zero")
    }

    pub(super) fn corrupt_chunk(detail: &str) -> Self {
        Self::new(
            RuntimeErrorKind::CorruptChunk,
            format!("Corrupt chunk: {}", detail),
        )
    }

    pub(super) fn io(source: std::io::Error) -> Self {
        Self::new(RuntimeErrorKind::Io, format!("I/O error: {}", source))
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> RuntimeErrorKind {
        self.kind
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RuntimeError {}
