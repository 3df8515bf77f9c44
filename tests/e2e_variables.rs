//! End-to-end tests for variables, assignment, and console input.

mod common;

use common::run_program;

#[test]
fn test_let_then_read() {
    assert_eq!(run_program("let x = 10; out x;", ""), "10\n");
}

#[test]
fn test_reassignment_updates_value() {
    assert_eq!(run_program("let x = 1; x = x + 41; out x;", ""), "42\n");
}

#[test]
fn test_two_globals_are_independent() {
    assert_eq!(
        run_program("let a = 1; let b = 2; a = 10; out a; out b;", ""),
        "10\n2\n"
    );
}

#[test]
fn test_assignment_expression_yields_the_stored_value() {
    assert_eq!(run_program("let x = 0; out x = 7;", ""), "7\n");
}

#[test]
fn test_redefining_a_global_overwrites_it() {
    assert_eq!(run_program("let x = 1; let x = 2; out x;", ""), "2\n");
}

#[test]
fn test_in_round_trip() {
    assert_eq!(run_program("in x; out x;", "123\n"), "123\n");
}

#[test]
fn test_in_reads_values_separated_by_spaces_and_newlines() {
    assert_eq!(
        run_program("in a; in b; in c; out a + b + c;", "1 2\n3\n"),
        "6\n"
    );
}

#[test]
fn test_malformed_input_reads_zero_and_skips_the_line() {
    assert_eq!(
        run_program("in a; in b; out a; out b;", "oops\n7\n"),
        "0\n7\n"
    );
}

#[test]
fn test_input_feeds_a_loop() {
    assert_eq!(
        run_program("in n; while (n > 0) { out n; n = n - 1; }", "3\n"),
        "3\n2\n1\n"
    );
}
