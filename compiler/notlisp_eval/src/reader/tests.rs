use notlisp_parse::{parse, Span};
use notlisp_value::EvalErrorKind;
use pretty_assertions::assert_eq;

use super::*;

fn read_str(source: &str) -> Value {
    read(&parse(source).unwrap())
}

#[test]
fn program_reads_as_sexpr() {
    assert_eq!(read_str("+ 1 2").to_string(), "(+ 1 2)");
    assert_eq!(read_str(""), Value::sexpr());
}

#[test]
fn nested_groups_keep_their_kind_and_order() {
    let value = read_str("(eval {head (list 1 -2)})");
    assert_eq!(value.to_string(), "((eval {head (list 1 -2)}))");
    let inner = value.children().and_then(|c| c.first()).cloned();
    assert_eq!(inner.map(|v| v.type_name()), Some("S-Expression"));
}

#[test]
fn signed_literals() {
    assert_eq!(read_str("+7 -0"), Value::sexpr().with(Value::number(7)).with(Value::number(0)));
}

#[test]
fn out_of_range_number_is_invalid() {
    let value = read_str("99999999999999999999");
    let err = value.children().and_then(|c| c.first()).and_then(Value::as_error).cloned();
    assert_eq!(err.as_ref().map(|e| e.message.as_str()), Some("invalid number"));
    assert_eq!(
        err.map(|e| e.kind),
        Some(EvalErrorKind::InvalidNumber {
            literal: "99999999999999999999".to_string()
        })
    );
}

#[test]
fn decimal_literal_is_invalid() {
    assert_eq!(read_str("1.5").to_string(), "(Error: invalid number)");
}

#[test]
fn extreme_literals_fit() {
    assert_eq!(
        read_str("-9223372036854775808 9223372036854775807").to_string(),
        "(-9223372036854775808 9223372036854775807)"
    );
}

#[test]
fn structural_node_reads_as_error() {
    let node = ParseNode::leaf(NodeKind::Delimiter, "(", Span::new(0, 1));
    assert!(read(&node).is_error());
}
