//! Conversion from parse tree to values.

use notlisp_parse::{NodeKind, ParseNode};
use notlisp_stack::ensure_sufficient_stack;
use tracing::debug;

use notlisp_value::{invalid_number, EvalError, Value};

/// Convert a parse-tree node into a value.
///
/// The program root and `( )` groups become S-Expressions, `{ }` groups
/// become Q-Expressions. Delimiter and boundary children are skipped.
/// A number literal that is not a valid `i64` reads as an error value.
pub fn read(node: &ParseNode) -> Value {
    match node.kind {
        NodeKind::Number => read_number(&node.contents),
        NodeKind::Symbol => Value::symbol(node.contents.as_str()),
        NodeKind::Program | NodeKind::SExpr => read_list(Value::sexpr(), node),
        NodeKind::QExpr => read_list(Value::qexpr(), node),
        NodeKind::Delimiter | NodeKind::Boundary => Value::error(EvalError::new(format!(
            "cannot read '{}' node",
            node.tag()
        ))),
    }
}

fn read_number(literal: &str) -> Value {
    match literal.parse::<i64>() {
        Ok(n) => Value::number(n),
        Err(err) => {
            debug!(literal, %err, "number literal rejected");
            Value::error(invalid_number(literal))
        }
    }
}

fn read_list(list: Value, node: &ParseNode) -> Value {
    ensure_sufficient_stack(|| {
        node.value_children()
            .fold(list, |list, child| list.with(read(child)))
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
