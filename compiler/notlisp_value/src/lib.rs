#![deny(clippy::arithmetic_side_effects)]
//! not-lisp values - the runtime data model of the interpreter.
//!
//! This crate provides:
//! - `Value`: the tagged runtime datum (number, error, symbol, function,
//!   S-Expression, Q-Expression)
//! - `Builtin`: the identity of a built-in operation stored in function values
//! - `EvalError` / `EvalErrorKind`: structured errors carried by error values
//!
//! # Ownership
//!
//! A `Value` exclusively owns its children. Cloning deep-copies the whole
//! tree and dropping releases it, so there is no sharing and no cycles.

mod builtin;
mod errors;
mod value;

pub use builtin::Builtin;
pub use errors::{Arity, EvalError, EvalErrorKind, EvalResult};
pub use value::Value;

// Re-export error constructors for use by other crates
pub use errors::{
    define_count_mismatch, define_non_symbol, division_by_zero, empty_list, integer_overflow,
    invalid_number, negative_exponent, not_a_function, unbound_symbol, wrong_arg_count,
    wrong_arg_type,
};
