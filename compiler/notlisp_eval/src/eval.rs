//! The evaluator.

use notlisp_parse::ParseNode;
use notlisp_stack::ensure_sufficient_stack;

use notlisp_value::{not_a_function, Value};

use crate::builtins;
use crate::environment::Environment;
use crate::reader::read;

/// Reduce `value` in `env`.
///
/// Symbols are replaced by a copy of their binding. S-Expressions evaluate
/// every child first, then either yield the first error, yield themselves
/// when empty, unwrap a single child, or apply their head function to the
/// remaining children. Every other value evaluates to itself.
pub fn eval(env: &mut Environment, value: Value) -> Value {
    match value {
        Value::Symbol(ref name) => env.get(name),
        Value::SExpr(_) => {
            let cells = value.into_children().unwrap_or_default();
            ensure_sufficient_stack(|| eval_sexpr(env, cells))
        }
        other => other,
    }
}

fn eval_sexpr(env: &mut Environment, cells: Vec<Value>) -> Value {
    // No short-circuit: later children still run after an earlier error.
    let evaluated: Vec<Value> = cells.into_iter().map(|cell| eval(env, cell)).collect();

    if let Some(index) = evaluated.iter().position(Value::is_error) {
        return Value::SExpr(evaluated).take(index).unwrap_or_else(Value::sexpr);
    }

    let mut cells = evaluated.into_iter();
    let Some(head) = cells.next() else {
        return Value::sexpr();
    };
    let args: Vec<Value> = cells.collect();
    if args.is_empty() {
        return head;
    }

    match head {
        Value::Function(builtin) => builtins::call(env, builtin, args),
        other => Value::error(not_a_function(other.type_name())),
    }
}

/// Read `node` and evaluate the result.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate(env: &mut Environment, node: &ParseNode) -> Value {
    eval(env, read(node))
}

/// Textual form of `value`, as shown at the prompt.
pub fn print(value: &Value) -> String {
    value.to_string()
}
