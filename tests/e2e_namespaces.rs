//! End-to-end tests for namespace blocks and qualified names.

mod common;

use common::run_program;

#[test]
fn test_qualified_function_call() {
    assert_eq!(
        run_program("ns math { fn sq(x) { return x * x; } } out math.sq(7);", ""),
        "49\n"
    );
}

#[test]
fn test_qualified_global_access() {
    assert_eq!(
        run_program("ns cfg { let answer = 42; } out cfg.answer;", ""),
        "42\n"
    );
}

#[test]
fn test_unqualified_name_is_a_different_global() {
    // `m.x` and `x` intern separately; the bare one is untouched.
    assert_eq!(
        run_program("ns m { let x = 1; } let x = 2; out m.x; out x;", ""),
        "1\n2\n"
    );
}

#[test]
fn test_namespace_body_executes_in_program_order() {
    assert_eq!(
        run_program("out 1; ns m { out 2; } out 3;", ""),
        "1\n2\n3\n"
    );
}

#[test]
fn test_nested_namespace_qualification() {
    assert_eq!(
        run_program(
            "ns outer { ns inner { fn id(x) { return x; } } } out outer.inner.id(5);",
            ""
        ),
        "5\n"
    );
}

#[test]
fn test_sibling_namespaces_do_not_collide() {
    assert_eq!(
        run_program("ns a { let v = 1; } ns b { let v = 2; } out a.v; out b.v;", ""),
        "1\n2\n"
    );
}

#[test]
fn test_reopening_a_namespace_extends_it() {
    // Calls are never auto-qualified, so even siblings in the same
    // namespace are reached by their full dotted name.
    assert_eq!(
        run_program(
            "ns m { fn one() { return 1; } } ns m { fn two() { return m.one() + 1; } } out m.two();",
            ""
        ),
        "2\n"
    );
}

#[test]
fn test_qualified_global_read_from_inside_function() {
    // The dotted read inside the function resolves against the global
    // intern table, which holds the fully-qualified name.
    assert_eq!(
        run_program(
            "ns cfg { let scale = 6; } ns math { fn scaled(n) { return cfg.scale * n; } } out math.scaled(7);",
            ""
        ),
        "42\n"
    );
}

#[test]
fn test_namespace_function_updates_namespace_global() {
    let source = "\
ns counter {
    let value = 0;
    fn bump() {
        counter.value = counter.value + 1;
        return counter.value;
    }
}
out counter.bump();
out counter.bump();
out counter.value;
";
    assert_eq!(run_program(source, ""), "1\n2\n2\n");
}

#[test]
fn test_in_statement_inside_namespace() {
    assert_eq!(
        run_program("ns io { in x; } out io.x;", "55\n"),
        "55\n"
    );
}
