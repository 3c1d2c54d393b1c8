//! Integer arithmetic built-ins.
//!
//! All arithmetic is checked. Operands are type-checked before any step
//! runs, so a bad operand is reported even after a zero divisor.

use notlisp_value::{
    division_by_zero, integer_overflow, negative_exponent, wrong_arg_count, Arity, Builtin,
    EvalError, EvalResult, Value,
};

use super::{exactly, expect_number};

/// Left fold over one or more numbers. A lone operand to `-` is negated.
pub(super) fn fold(builtin: Builtin, args: &[Value]) -> EvalResult {
    let numbers = args
        .iter()
        .enumerate()
        .map(|(index, arg)| expect_number(builtin, index, arg))
        .collect::<Result<Vec<i64>, EvalError>>()?;

    let Some((&first, rest)) = numbers.split_first() else {
        return Err(wrong_arg_count(builtin.name(), Arity::AtLeast(1), 0));
    };

    if rest.is_empty() && builtin == Builtin::Sub {
        return first
            .checked_neg()
            .map(Value::number)
            .ok_or_else(|| integer_overflow("negation"));
    }

    numbers
        .iter()
        .enumerate()
        .skip(1)
        .try_fold(first, |acc, (index, &operand)| {
            apply(builtin, acc, operand, index)
        })
        .map(Value::number)
}

/// `incr` / `decr` on exactly one number.
pub(super) fn step(builtin: Builtin, args: Vec<Value>) -> EvalResult {
    let [arg] = exactly::<1>(builtin, args)?;
    let n = expect_number(builtin, 0, &arg)?;
    let stepped = if builtin == Builtin::Incr {
        n.checked_add(1).ok_or_else(|| integer_overflow("increment"))
    } else {
        n.checked_sub(1).ok_or_else(|| integer_overflow("decrement"))
    };
    stepped.map(Value::number)
}

fn apply(builtin: Builtin, lhs: i64, rhs: i64, index: usize) -> Result<i64, EvalError> {
    match builtin {
        Builtin::Add => lhs
            .checked_add(rhs)
            .ok_or_else(|| integer_overflow("addition")),
        Builtin::Sub => lhs
            .checked_sub(rhs)
            .ok_or_else(|| integer_overflow("subtraction")),
        Builtin::Mul => lhs
            .checked_mul(rhs)
            .ok_or_else(|| integer_overflow("multiplication")),
        Builtin::Div | Builtin::Mod if rhs == 0 => Err(division_by_zero()),
        Builtin::Div => lhs
            .checked_div(rhs)
            .ok_or_else(|| integer_overflow("division")),
        // With a nonzero divisor only i64::MIN % -1 fails, and its remainder is 0.
        Builtin::Mod => Ok(lhs.checked_rem(rhs).unwrap_or(0)),
        Builtin::Pow => power(lhs, rhs, index),
        Builtin::Min => Ok(lhs.min(rhs)),
        Builtin::Max => Ok(lhs.max(rhs)),
        other => Err(EvalError::new(format!(
            "'{}' is not a binary arithmetic operation",
            other.name()
        ))),
    }
}

fn power(base: i64, exponent: i64, index: usize) -> Result<i64, EvalError> {
    if exponent < 0 {
        return Err(negative_exponent(Builtin::Pow.name(), index));
    }
    match (u32::try_from(exponent), base) {
        (Ok(exponent), _) => base
            .checked_pow(exponent)
            .ok_or_else(|| integer_overflow("exponentiation")),
        (Err(_), 0 | 1) => Ok(base),
        (Err(_), -1) => Ok(if exponent & 1 == 0 { 1 } else { -1 }),
        (Err(_), _) => Err(integer_overflow("exponentiation")),
    }
}
