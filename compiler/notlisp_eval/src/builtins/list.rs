//! List built-ins: `list`, `head`, `tail`, `eval`, `join`, `cons`, `len`.

use notlisp_stack::ensure_sufficient_stack;

use notlisp_value::{empty_list, Builtin, EvalResult, Value};

use super::{at_least, exactly, expect_qexpr};
use crate::environment::Environment;

#[expect(
    clippy::unnecessary_wraps,
    reason = "Shares the fallible signature of the other built-ins"
)]
pub(super) fn list(args: Vec<Value>) -> EvalResult {
    Ok(Value::SExpr(args).into_qexpr())
}

pub(super) fn head(args: Vec<Value>) -> EvalResult {
    let [list] = exactly::<1>(Builtin::Head, args)?;
    expect_qexpr(Builtin::Head, 0, &list)?;
    let first = list
        .take(0)
        .ok_or_else(|| empty_list(Builtin::Head.name()))?;
    Ok(Value::qexpr().with(first))
}

pub(super) fn tail(args: Vec<Value>) -> EvalResult {
    let [mut list] = exactly::<1>(Builtin::Tail, args)?;
    expect_qexpr(Builtin::Tail, 0, &list)?;
    match list.pop(0) {
        Some(_) => Ok(list),
        None => Err(empty_list(Builtin::Tail.name())),
    }
}

pub(super) fn eval(env: &mut Environment, args: Vec<Value>) -> EvalResult {
    let [list] = exactly::<1>(Builtin::Eval, args)?;
    expect_qexpr(Builtin::Eval, 0, &list)?;
    Ok(crate::eval::eval(env, list.into_sexpr()))
}

pub(super) fn join(args: Vec<Value>) -> EvalResult {
    at_least(Builtin::Join, &args, 1)?;
    for (index, arg) in args.iter().enumerate() {
        expect_qexpr(Builtin::Join, index, arg)?;
    }
    Ok(args.into_iter().fold(Value::qexpr(), Value::join))
}

pub(super) fn cons(args: Vec<Value>) -> EvalResult {
    let [first, list] = exactly::<2>(Builtin::Cons, args)?;
    expect_qexpr(Builtin::Cons, 1, &list)?;
    Ok(Value::qexpr().with(first).join(list))
}

/// Nested Q-Expressions count their own elements instead of counting as one.
pub(super) fn len(args: Vec<Value>) -> EvalResult {
    let [list] = exactly::<1>(Builtin::Len, args)?;
    expect_qexpr(Builtin::Len, 0, &list)?;
    let count = i64::try_from(flat_len(&list)).unwrap_or(i64::MAX);
    Ok(Value::number(count))
}

fn flat_len(list: &Value) -> usize {
    ensure_sufficient_stack(|| {
        list.children()
            .unwrap_or_default()
            .iter()
            .fold(0usize, |count, child| {
                let own = match child {
                    Value::QExpr(_) => flat_len(child),
                    _ => 1,
                };
                count.saturating_add(own)
            })
    })
}
