//! Pipeline orchestration for the ccb binary.
//!
//! The driver validates the source path, reads the file, and runs the
//! lex/parse/compile/execute pipeline, mapping each failure class to its
//! exit code: 1 for usage and I/O problems, 65 for compile errors, 70
//! for runtime errors.
//!
//! Parse errors are reported but are not fatal on their own: the
//! statements that failed were dropped, whatever parsed is still
//! compiled, and a compile error follows if the rest of the program
//! depended on the dropped parts.

use std::io;
use std::path::Path;

use ccb::compiler;
use ccb::lexer::Lexer;
use ccb::parser::Parser;
use ccb::vm::Vm;

use crate::diagnostics;

/// Exit code for usage and I/O errors.
const EXIT_USAGE: i32 = 1;
/// Exit code for fatal compile errors.
const EXIT_COMPILE_ERROR: i32 = 65;
/// Exit code for fatal runtime errors.
const EXIT_RUNTIME_ERROR: i32 = 70;

/// Runs a `.ccb` source file and returns the process exit code.
pub(crate) fn run(path: &str) -> i32 {
    if !has_ccb_extension(path) {
        eprintln!(
            "Error: \"{}\" has an unsupported extension (expected .ccb)",
            path
        );
        return EXIT_USAGE;
    }

    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: failed to read \"{}\": {}", path, error);
            return EXIT_USAGE;
        }
    };

    interpret(path, &source)
}

/// Returns true when the path ends in `.ccb`, case-insensitively.
fn has_ccb_extension(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ccb"))
}

/// Runs the full pipeline over already-loaded source text.
fn interpret(filename: &str, source: &str) -> i32 {
    let tokens = Lexer::new(source).tokenize();
    let mut parser = Parser::new(tokens);
    let program = parser.parse();
    for error in parser.errors() {
        diagnostics::report_parse_error(filename, source, error);
    }

    let chunk = match compiler::compile(&program) {
        Ok(chunk) => chunk,
        Err(error) => {
            diagnostics::report_compile_error(filename, source, &error);
            return EXIT_COMPILE_ERROR;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut vm = Vm::new(&chunk);
    match vm.run(&mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("RUNTIME ERROR: {}", error);
            EXIT_RUNTIME_ERROR
        }
    }
}
