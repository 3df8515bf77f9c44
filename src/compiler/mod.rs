//! The single-pass bytecode compiler.
//!
//! This module walks the AST once and emits a flat [`Chunk`]. Three
//! tables make the single pass work:
//!
//! - a **global name table** interning each distinct top-level name to a
//!   one-byte id (the table index IS the id),
//! - a **functions table** mapping each fully-qualified function name to
//!   its entry offset, filled in as bodies are emitted,
//! - an **unresolved-call list** recording call sites whose target was
//!   not yet defined; it is drained once the whole program has been
//!   emitted, and any entry that still has no target is an undefined
//!   function error.
//!
//! Forward jumps are emitted with a `0xffff` placeholder and patched as
//! soon as their destination is known. The offset convention matches the
//! VM: a distance is measured from the first operand byte, which is
//! where the instruction pointer sits when the VM adds the offset.
//!
//! # See Also
//!
//! * [`crate::ast`] - The input
//! * [`crate::bytecode`] - The output
//! * [`crate::vm`] - Executes the result

mod error;
mod expr;
mod stmt;


pub use error::{CompileError, CompileErrorKind};

use crate::ast::Program;
use crate::bytecode::{Chunk, OpCode, Value};
use crate::token::Span;

/// Maximum number of interned global names; ids are one byte.
const GLOBAL_NAMES_MAX: usize = 256;
/// Maximum parameters plus locals per function; slots are one byte.
const LOCALS_MAX: usize = 256;
/// Maximum number of function definitions.
const FUNCTIONS_MAX: usize = 256;
/// Maximum number of call sites waiting on forward references.
const UNRESOLVED_MAX: usize = 512;

/// Compiles a program to a bytecode chunk.
///
/// This is the only entry point; all compile errors are fatal.
pub fn compile(program: &Program) -> Result<Chunk, CompileError> {
    let mut compiler = Compiler::new();

    for stmt in &program.statements {
        compiler.compile_stmt(stmt)?;
    }

    compiler.link_unresolved()?;
    compiler.chunk.write_op(OpCode::Return);

    Ok(compiler.chunk)
}

/// One named local slot in the current function.
struct Local {
    name: String,
    slot: u8,
}

/// Per-function compile state: parameters first, `let` locals after.
struct FunctionScope {
    locals: Vec<Local>,
}

/// A call site whose target function was not yet defined when the call
/// was emitted.
struct UnresolvedCall {
    name: String,
    /// Offset of the first target byte to overwrite.
    patch_pos: usize,
    /// Where the call appeared, for the undefined-function diagnostic.
    span: Span,
}

/// State for one compilation.
struct Compiler {
    chunk: Chunk,
    /// Interned global names; the index of a name is its id.
    global_names: Vec<String>,
    /// Defined functions and their entry offsets.
    functions: Vec<(String, usize)>,
    /// Call sites awaiting a target.
    unresolved: Vec<UnresolvedCall>,
    /// `Some` while compiling a function body.
    scope: Option<FunctionScope>,
}

impl Compiler {
    fn new() -> Self {
        Compiler {
            chunk: Chunk::new(),
            global_names: Vec::new(),
            functions: Vec::new(),
            unresolved: Vec::new(),
            scope: None,
        }
    }

    /// Returns true while compiling inside a function body.
    fn in_function(&self) -> bool {
        self.scope.is_some()
    }

    /// Looks up a name among the current function's locals.
    fn find_local(&self, name: &str) -> Option<u8> {
        let scope = self.scope.as_ref()?;
        scope
            .locals
            .iter()
            .find(|local| local.name == name)
            .map(|local| local.slot)
    }

    /// Interns a global name, returning its stable one-byte id.
    ///
    /// The same string always maps to the same id within a compilation.
    fn intern_global(&mut self, name: &str, span: Span) -> Result<u8, CompileError> {
        if let Some(id) = self.global_names.iter().position(|n| n == name) {
            return Ok(id as u8);
        }
        if self.global_names.len() >= GLOBAL_NAMES_MAX {
            return Err(CompileError::new(
                CompileErrorKind::TooManyGlobalNames,
                "Too many global names",
                span,
            ));
        }
        self.global_names.push(name.to_string());
        Ok((self.global_names.len() - 1) as u8)
    }

    /// Returns the entry offset of a defined function.
    fn find_function(&self, name: &str) -> Option<usize> {
        self.functions
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, offset)| *offset)
    }

    /// Records a function's entry offset under its qualified name.
    ///
    /// Redefining a name re-points it at the new body.
    fn register_function(
        &mut self,
        name: &str,
        offset: usize,
        span: Span,
    ) -> Result<(), CompileError> {
        if let Some(entry) = self.functions.iter_mut().find(|(n, _)| n == name) {
            entry.1 = offset;
            return Ok(());
        }
        if self.functions.len() >= FUNCTIONS_MAX {
            return Err(CompileError::new(
                CompileErrorKind::TooManyFunctions,
                "Too many functions",
                span,
            ));
        }
        self.functions.push((name.to_string(), offset));
        Ok(())
    }

    /// Emits `CONSTANT <idx>` for a value, adding it to the pool.
    fn emit_constant(&mut self, value: Value, span: Span) -> Result<(), CompileError> {
        let index = self.chunk.add_constant(value);
        let index = u8::try_from(index).map_err(|_| {
            CompileError::new(
                CompileErrorKind::TooManyConstants,
                "Too many constants in one chunk",
                span,
            )
        })?;
        self.chunk.write_op(OpCode::Constant);
        self.chunk.write_byte(index);
        Ok(())
    }

    /// Emits a jump instruction with a placeholder offset.
    ///
    /// Returns the position of the first offset byte for patching.
    fn emit_jump(&mut self, op: OpCode) -> usize {
        self.chunk.write_op(op);
        self.chunk.write_u16(0xffff);
        self.chunk.len() - 2
    }

    /// Patches a forward jump to land at the current end of code.
    ///
    /// The distance is measured from the first offset byte, which is
    /// where the instruction pointer sits when the VM applies it.
    fn patch_jump(&mut self, patch_pos: usize, span: Span) -> Result<(), CompileError> {
        let distance = self.chunk.len() - patch_pos;
        let distance = u16::try_from(distance).map_err(|_| {
            CompileError::new(
                CompileErrorKind::JumpTooLarge,
                "Too much code to jump over",
                span,
            )
        })?;
        self.chunk.patch_u16(patch_pos, distance);
        Ok(())
    }

    /// Emits a backward jump to `loop_start`.
    fn emit_loop(&mut self, loop_start: usize, span: Span) -> Result<(), CompileError> {
        self.chunk.write_op(OpCode::Loop);
        let distance = self.chunk.len() - loop_start;
        let distance = u16::try_from(distance).map_err(|_| {
            CompileError::new(CompileErrorKind::LoopTooLarge, "Loop body too large", span)
        })?;
        self.chunk.write_u16(distance);
        Ok(())
    }

    /// Drains the unresolved-call list, patching every recorded call
    /// site with its function's final entry offset.
    fn link_unresolved(&mut self) -> Result<(), CompileError> {
        let unresolved = std::mem::take(&mut self.unresolved);
        for call in unresolved {
            let Some(offset) = self.find_function(&call.name) else {
                return Err(CompileError::new(
                    CompileErrorKind::UndefinedFunction,
                    format!("Undefined function '{}'", call.name),
                    call.span,
                ));
            };
            let target = u16::try_from(offset).map_err(|_| {
                CompileError::new(
                    CompileErrorKind::JumpTooLarge,
                    format!("Entry of function '{}' is out of call range", call.name),
                    call.span,
                )
            })?;
            self.chunk.patch_u16(call.patch_pos, target);
        }
        Ok(())
    }
}
