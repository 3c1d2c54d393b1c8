//! `def`: global binding.

use notlisp_value::{
    define_count_mismatch, define_non_symbol, wrong_arg_count, Arity, Builtin, EvalError,
    EvalResult, Value,
};

use super::expect_qexpr;
use crate::environment::Environment;

/// `def {a b} 1 2` binds `a` and `b` globally and evaluates to `()`.
///
/// Nothing is bound unless every check passes.
pub(super) fn def(env: &mut Environment, args: Vec<Value>) -> EvalResult {
    let mut args = args.into_iter();
    let Some(symbols) = args.next() else {
        return Err(wrong_arg_count(Builtin::Def.name(), Arity::AtLeast(1), 0));
    };
    expect_qexpr(Builtin::Def, 0, &symbols)?;

    let names = symbols
        .into_children()
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, symbol)| match symbol.as_symbol() {
            Some(name) => Ok(name.to_owned()),
            None => Err(define_non_symbol(index, symbol.type_name())),
        })
        .collect::<Result<Vec<String>, EvalError>>()?;

    let values: Vec<Value> = args.collect();
    if names.len() != values.len() {
        return Err(define_count_mismatch(names.len(), values.len()));
    }

    for (name, value) in names.iter().zip(&values) {
        env.put(name, value);
    }
    Ok(Value::sexpr())
}
