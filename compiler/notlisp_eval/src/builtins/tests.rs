use notlisp_parse::parse;
use pretty_assertions::assert_eq;

use super::*;
use crate::eval::evaluate;

fn run(env: &mut Environment, source: &str) -> String {
    evaluate(env, &parse(source).unwrap()).to_string()
}

fn run_fresh(source: &str) -> String {
    run(&mut Environment::with_builtins(), source)
}

// Dispatch

#[test]
fn call_folds_errors_into_values() {
    let mut env = Environment::new();
    let value = call(&mut env, Builtin::Head, vec![Value::qexpr()]);
    assert_eq!(value.to_string(), "Error: Function 'head' passed {}!");
}

#[test]
fn aliases_behave_identically() {
    assert_eq!(run_fresh("add 1 2"), run_fresh("+ 1 2"));
    assert_eq!(run_fresh("sub 9 4"), "5");
    assert_eq!(run_fresh("mul 3 3"), "9");
    assert_eq!(run_fresh("div 9 3"), "3");
    assert_eq!(run_fresh("mod 9 4"), "1");
    assert_eq!(run_fresh("pow 2 10"), "1024");
}

// list / head / tail

#[test]
fn list_quotes_its_arguments() {
    assert_eq!(run_fresh("list 1 2 3"), "{1 2 3}");
    assert_eq!(run_fresh("list (+ 1 1) x"), "Error: unbound symbol 'x'");
}

#[test]
fn head_keeps_only_the_first_element() {
    assert_eq!(run_fresh("head {1 2 3}"), "{1}");
    assert_eq!(run_fresh("head {{a b} c}"), "{{a b}}");
}

#[test]
fn head_errors() {
    assert_eq!(run_fresh("head {}"), "Error: Function 'head' passed {}!");
    assert_eq!(
        run_fresh("head 1 2"),
        "Error: Function 'head' passed incorrect number of arguments. Got 2, Expected 1."
    );
    assert_eq!(
        run_fresh("head (tail {1})"),
        "Error: Function 'head' passed {}!"
    );
    assert_eq!(
        run_fresh("head 5"),
        "Error: Function 'head' passed incorrect type for argument 0. Got Number, Expected Q-Expression."
    );
}

#[test]
fn tail_drops_the_first_element() {
    assert_eq!(run_fresh("tail {1 2 3}"), "{2 3}");
    assert_eq!(run_fresh("tail {1}"), "{}");
    assert_eq!(run_fresh("tail {}"), "Error: Function 'tail' passed {}!");
}

// eval

#[test]
fn eval_runs_a_quoted_expression() {
    assert_eq!(run_fresh("eval {+ 1 2}"), "3");
    assert_eq!(run_fresh("eval {head (list 1 2 3 4)}"), "{1}");
    assert_eq!(run_fresh("eval {}"), "()");
    assert_eq!(
        run_fresh("eval 1"),
        "Error: Function 'eval' passed incorrect type for argument 0. Got Number, Expected Q-Expression."
    );
}

// join / cons / len

#[test]
fn join_concatenates_in_order() {
    assert_eq!(run_fresh("join {1 2} {} {3 {4}}"), "{1 2 3 {4}}");
    assert_eq!(run_fresh("join {1}"), "{1}");
    assert_eq!(
        run_fresh("join {1} 2"),
        "Error: Function 'join' passed incorrect type for argument 1. Got Number, Expected Q-Expression."
    );
}

#[test]
fn cons_prepends() {
    assert_eq!(run_fresh("cons 1 {2 3}"), "{1 2 3}");
    assert_eq!(run_fresh("cons {a} {}"), "{{a}}");
    assert_eq!(
        run_fresh("cons 1 2"),
        "Error: Function 'cons' passed incorrect type for argument 1. Got Number, Expected Q-Expression."
    );
    assert_eq!(
        run_fresh("cons {1}"),
        "Error: Function 'cons' passed incorrect number of arguments. Got 1, Expected 2."
    );
}

#[test]
fn len_counts_nested_elements() {
    assert_eq!(run_fresh("len {}"), "0");
    assert_eq!(run_fresh("len {1 2 3}"), "3");
    assert_eq!(run_fresh("len {1 {2 3} {{4}} {}}"), "4");
    assert_eq!(run_fresh("len {(1 2)}"), "1");
}

// def

#[test]
fn def_binds_globally() {
    let mut env = Environment::with_builtins();
    assert_eq!(run(&mut env, "def {x y} 10 20"), "()");
    assert_eq!(run(&mut env, "+ x y"), "30");
    assert_eq!(run(&mut env, "def {x} 1"), "()");
    assert_eq!(run(&mut env, "x"), "1");
}

#[test]
fn def_can_bind_lists_and_functions() {
    let mut env = Environment::with_builtins();
    run(&mut env, "def {xs plus} {1 2} +");
    assert_eq!(run(&mut env, "plus 1 (len xs)"), "3");
}

#[test]
fn def_errors_bind_nothing() {
    let mut env = Environment::with_builtins();
    assert_eq!(
        run(&mut env, "def {a 1} 5 6"),
        "Error: Function 'def' cannot define non-symbol at position 1. Got Number, Expected Symbol."
    );
    assert_eq!(
        run(&mut env, "def {a b} 5"),
        "Error: Function 'def' passed incorrect number of values for symbols. Got 1, Expected 2."
    );
    assert_eq!(
        run(&mut env, "def 1 2"),
        "Error: Function 'def' passed incorrect type for argument 0. Got Number, Expected Q-Expression."
    );
    assert!(!env.contains("a"));
}

#[test]
fn def_of_empty_list() {
    assert_eq!(run_fresh("def {}"), "()");
}
