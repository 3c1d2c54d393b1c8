//! Built-in operations.
//!
//! Each built-in takes ownership of its already-evaluated arguments and
//! produces exactly one value. Internally the implementations return
//! `EvalResult` so checks can use `?`; [`call`] folds the error side back
//! into an error value.

mod arith;
mod binding;
mod list;

use tracing::trace;

use notlisp_value::{wrong_arg_count, wrong_arg_type, Arity, Builtin, EvalError, Value};

use crate::environment::Environment;

/// Apply `builtin` to `args`.
pub fn call(env: &mut Environment, builtin: Builtin, args: Vec<Value>) -> Value {
    trace!(builtin = builtin.name(), argc = args.len(), "apply");
    let result = match builtin {
        Builtin::List => list::list(args),
        Builtin::Head => list::head(args),
        Builtin::Tail => list::tail(args),
        Builtin::Eval => list::eval(env, args),
        Builtin::Join => list::join(args),
        Builtin::Cons => list::cons(args),
        Builtin::Len => list::len(args),
        Builtin::Def => binding::def(env, args),
        Builtin::Add
        | Builtin::Sub
        | Builtin::Mul
        | Builtin::Div
        | Builtin::Mod
        | Builtin::Pow
        | Builtin::Min
        | Builtin::Max => arith::fold(builtin, &args),
        Builtin::Incr | Builtin::Decr => arith::step(builtin, args),
    };
    result.unwrap_or_else(Value::error)
}

pub(crate) fn register_builtins(env: &mut Environment) {
    for builtin in Builtin::ALL {
        for alias in builtin.aliases() {
            env.register_builtin(alias, builtin);
        }
    }
}

// Argument checks

/// Destructure exactly `N` arguments.
fn exactly<const N: usize>(builtin: Builtin, args: Vec<Value>) -> Result<[Value; N], EvalError> {
    args.try_into().map_err(|args: Vec<Value>| {
        wrong_arg_count(builtin.name(), Arity::Exactly(N), args.len())
    })
}

fn at_least(builtin: Builtin, args: &[Value], min: usize) -> Result<(), EvalError> {
    if args.len() < min {
        return Err(wrong_arg_count(builtin.name(), Arity::AtLeast(min), args.len()));
    }
    Ok(())
}

fn expect_qexpr(builtin: Builtin, index: usize, arg: &Value) -> Result<(), EvalError> {
    match arg {
        Value::QExpr(_) => Ok(()),
        other => Err(wrong_arg_type(
            builtin.name(),
            index,
            "Q-Expression",
            other.type_name(),
        )),
    }
}

fn expect_number(builtin: Builtin, index: usize, arg: &Value) -> Result<i64, EvalError> {
    arg.as_number()
        .ok_or_else(|| wrong_arg_type(builtin.name(), index, "Number", arg.type_name()))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
