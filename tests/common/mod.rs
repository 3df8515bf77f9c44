//! Common test utilities for ccb integration tests.
//!
//! This module provides shared helper functions used across all
//! integration test files: an in-process pipeline runner for behavior
//! tests, and helpers that spawn the built `ccb` binary for exit-code
//! and stdio tests.

// Each test file is compiled as a separate crate, so not all functions
// are used in every test file. This is expected behavior.
#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use ccb::bytecode::Chunk;
use ccb::compiler::{self, CompileError};
use ccb::lexer::Lexer;
use ccb::parser::Parser;
use ccb::vm::{RuntimeError, Vm};

/// Returns the path to the ccb binary built by cargo.
pub fn ccb_binary() -> String {
    env!("CARGO_BIN_EXE_ccb").to_string()
}

/// Lexes, parses, and compiles a program, asserting the parse was clean.
pub fn compile_chunk(source: &str) -> Result<Chunk, CompileError> {
    let tokens = Lexer::new(source).tokenize();
    let mut parser = Parser::new(tokens);
    let program = parser.parse();
    assert!(
        parser.errors().is_empty(),
        "Unexpected parse errors for {:?}: {}",
        source,
        parser
            .errors()
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    );
    compiler::compile(&program)
}

/// Runs a program in-process with the given stdin, returning stdout.
///
/// Panics on parse, compile, or runtime failures; use the error helpers
/// for those paths.
pub fn run_program(source: &str, stdin: &str) -> String {
    let chunk =
        compile_chunk(source).unwrap_or_else(|e| panic!("Compile failed for {:?}: {}", source, e));

    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let mut output = Vec::new();
    let mut vm = Vm::new(&chunk);
    vm.run(&mut input, &mut output)
        .unwrap_or_else(|e| panic!("Runtime error for {:?}: {}", source, e));
    String::from_utf8(output).expect("program output is UTF-8")
}

/// Compiles a program, expecting and returning a compile error.
pub fn compile_error(source: &str) -> CompileError {
    match compile_chunk(source) {
        Ok(_) => panic!("Expected compilation of {:?} to fail", source),
        Err(error) => error,
    }
}

/// Runs a program in-process, expecting and returning a runtime error.
pub fn runtime_error(source: &str, stdin: &str) -> RuntimeError {
    let chunk =
        compile_chunk(source).unwrap_or_else(|e| panic!("Compile failed for {:?}: {}", source, e));

    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let mut output = Vec::new();
    let mut vm = Vm::new(&chunk);
    match vm.run(&mut input, &mut output) {
        Ok(()) => panic!("Expected {:?} to fail at runtime", source),
        Err(error) => error,
    }
}

/// The outcome of running the ccb binary.
pub struct BinaryRun {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Runs the ccb binary on an existing file with the given stdin.
pub fn run_binary_on_path(path: &Path, stdin: &str) -> BinaryRun {
    let mut child = Command::new(ccb_binary())
        .arg(path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn ccb binary");

    child
        .stdin
        .as_mut()
        .expect("child stdin must be piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write child stdin");

    let output = child.wait_with_output().expect("failed to wait for ccb");
    BinaryRun {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Writes a program to a `.ccb` temp file and runs the binary on it.
pub fn run_binary(source: &str, stdin: &str) -> BinaryRun {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("program.ccb");
    std::fs::write(&path, source).expect("failed to write source file");
    run_binary_on_path(&path, stdin)
}
