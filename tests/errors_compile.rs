//! Integration tests for fatal compile errors.
//!
//! Several limits interact: every integer literal adds a constant-pool
//! entry, so the limit tests below read globals instead of literals
//! where the constant pool would otherwise fill up first.

mod common;

use ccb::compiler::CompileErrorKind;
use common::{compile_error, run_binary};

#[test]
fn test_undefined_function_at_link() {
    let error = compile_error("out nope(); fn other() { return 1; }");
    assert_eq!(error.kind(), CompileErrorKind::UndefinedFunction);
    assert!(error.message().contains("nope"));
}

#[test]
fn test_undefined_function_error_names_the_call_site() {
    let error = compile_error("out 1;\nout nope();\n");
    let span = error.span().expect("undefined function carries a span");
    assert_eq!(span.line, 2);
}

#[test]
fn test_in_against_undeclared_local() {
    let error = compile_error("fn f(a) { in b; return a; }");
    assert_eq!(error.kind(), CompileErrorKind::UndeclaredLocalInput);
    assert!(error.message().contains('b'));
}

#[test]
fn test_call_target_must_be_identifier() {
    let error = compile_error("out 5(1);");
    assert_eq!(error.kind(), CompileErrorKind::InvalidCallTarget);
}

#[test]
fn test_too_many_constants() {
    let mut source = String::new();
    for i in 0..257 {
        source.push_str(&format!("out {};\n", i));
    }
    let error = compile_error(&source);
    assert_eq!(error.kind(), CompileErrorKind::TooManyConstants);
}

#[test]
fn test_too_many_global_names() {
    let mut source = String::from("let seed = 0;\n");
    for i in 0..256 {
        source.push_str(&format!("let g{} = seed;\n", i));
    }
    let error = compile_error(&source);
    assert_eq!(error.kind(), CompileErrorKind::TooManyGlobalNames);
}

#[test]
fn test_too_many_locals_in_one_function() {
    let mut source = String::from("let seed = 0;\nfn f() {\n");
    for i in 0..257 {
        source.push_str(&format!("let l{} = seed;\n", i));
    }
    source.push_str("}\n");
    let error = compile_error(&source);
    assert_eq!(error.kind(), CompileErrorKind::TooManyLocals);
}

#[test]
fn test_too_many_functions() {
    let mut source = String::from("let g = 0;\n");
    for i in 0..257 {
        source.push_str(&format!("fn f{}() {{ return g; }}\n", i));
    }
    let error = compile_error(&source);
    assert_eq!(error.kind(), CompileErrorKind::TooManyFunctions);
}

#[test]
fn test_too_many_unresolved_calls() {
    // Every call is a forward reference until the definition at the
    // end, so the 513th one overflows the unresolved list.
    let mut source = String::new();
    for _ in 0..513 {
        source.push_str("later();\n");
    }
    source.push_str("fn later() { return 0; }\n");
    let error = compile_error(&source);
    assert_eq!(error.kind(), CompileErrorKind::TooManyUnresolvedCalls);
}

#[test]
fn test_jump_distance_overflow() {
    // An if-branch bigger than 65535 bytes overflows the forward
    // jump's 16-bit distance. `out x;` is three bytes and adds no
    // constants.
    let mut source = String::from("if (1) {\n");
    for _ in 0..22000 {
        source.push_str("out x;\n");
    }
    source.push_str("}\n");
    let error = compile_error(&source);
    assert_eq!(error.kind(), CompileErrorKind::JumpTooLarge);
}

#[test]
fn test_loop_body_overflow() {
    let mut source = String::from("while (x) {\n");
    for _ in 0..22000 {
        source.push_str("out x;\n");
    }
    source.push_str("}\n");
    let error = compile_error(&source);
    assert_eq!(error.kind(), CompileErrorKind::LoopTooLarge);
}

#[test]
fn test_compile_error_exit_code_via_binary() {
    let run = run_binary("fn f() { in ghost; }", "");
    assert_eq!(run.code, Some(65));
    assert!(run.stderr.contains("ghost"));
}
