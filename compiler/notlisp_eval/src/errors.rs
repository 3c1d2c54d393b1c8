//! Error constructors used by the evaluator.
//!
//! ```ignore
//! use notlisp_eval::errors::{unbound_symbol, wrong_arg_count};
//! ```

pub use notlisp_value::{Arity, EvalError, EvalErrorKind, EvalResult};

// Arithmetic

pub use notlisp_value::{division_by_zero, integer_overflow, negative_exponent};

// Reading, lookup and application

pub use notlisp_value::{invalid_number, not_a_function, unbound_symbol};

// Built-in arguments and binding

pub use notlisp_value::{
    define_count_mismatch, define_non_symbol, empty_list, wrong_arg_count, wrong_arg_type,
};
