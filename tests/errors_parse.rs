//! Integration tests for parse error reporting and recovery.
//!
//! Parse errors are not fatal: the failed statement is dropped, the
//! diagnostic goes to stderr, and whatever parsed still compiles and
//! runs.

mod common;

use common::run_binary;

#[test]
fn test_bad_statement_is_reported_but_rest_runs() {
    let run = run_binary("let x 5; out 1;", "");
    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "1\n");
    assert!(run.stderr.contains("Expected '='"));
}

#[test]
fn test_illegal_character_diagnostic() {
    let run = run_binary("out 1 ? 2;", "");
    assert!(run.stderr.contains("illegal character '?'"));
}

#[test]
fn test_invalid_assignment_target_diagnostic() {
    let run = run_binary("1 = 2; out 3;", "");
    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "3\n");
    assert!(run.stderr.contains("Invalid assignment target"));
}

#[test]
fn test_each_bad_statement_reported_once() {
    let run = run_binary("let a 1; let b 2; out 9;", "");
    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "9\n");
    let count = run.stderr.matches("Expected '='").count();
    assert_eq!(count, 2);
}

#[test]
fn test_dropped_function_definition_surfaces_as_compile_error() {
    // The malformed definition is dropped at parse time, so the call
    // that depends on it fails the final link.
    let run = run_binary("fn broken( { return 1; } out broken();", "");
    assert_eq!(run.code, Some(65));
    assert!(!run.stderr.is_empty());
}
