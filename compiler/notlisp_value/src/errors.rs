//! Error types for evaluation.
//!
//! Every failure in the language is reported as an error *value* rather than
//! through a separate channel, so `EvalError` is plain data that can sit
//! inside a `Value::Error` and propagate like any other value.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` carries the context of each failure (function name,
//! argument position, expected and actual types). Factory functions
//! (e.g., `division_by_zero()`) are the public API: they populate both
//! `kind` and `message`, and the `Display` impl of the kind is the exact
//! text users see after `Error: `.

use std::fmt;

use crate::value::Value;

/// Result of a fallible built-in step.
pub type EvalResult = Result<Value, EvalError>;

/// How many arguments a built-in accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exactly(usize),
    /// This many arguments or more.
    AtLeast(usize),
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "{n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Typed error category.
///
/// Function and type names are `&'static str` because they always come from
/// the fixed built-in table and `Value::type_name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Arithmetic
    DivisionByZero,
    IntegerOverflow {
        operation: &'static str,
    },
    NegativeExponent {
        function: &'static str,
        index: usize,
    },

    // Reading
    InvalidNumber {
        literal: String,
    },

    // Lookup and application
    UnboundSymbol {
        name: String,
    },
    NotAFunction {
        type_name: &'static str,
    },

    // Built-in argument checks
    ArityMismatch {
        function: &'static str,
        expected: Arity,
        got: usize,
    },
    TypeMismatch {
        function: &'static str,
        index: usize,
        expected: &'static str,
        got: &'static str,
    },
    EmptyList {
        function: &'static str,
    },

    // Binding
    DefineNonSymbol {
        index: usize,
        got: &'static str,
    },
    DefineCountMismatch {
        symbols: usize,
        values: usize,
    },

    /// Catch-all for errors without a structured kind.
    Custom {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division By Zero!"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow in {operation}"),
            Self::NegativeExponent { function, index } => write!(
                f,
                "Function '{function}' passed negative exponent for argument {index}."
            ),

            // The literal is kept for diagnostics; the message stays terse.
            Self::InvalidNumber { .. } => write!(f, "invalid number"),

            Self::UnboundSymbol { name } => write!(f, "unbound symbol '{name}'"),
            Self::NotAFunction { .. } => write!(f, "first element is not a function"),

            Self::ArityMismatch {
                function,
                expected,
                got,
            } => write!(
                f,
                "Function '{function}' passed incorrect number of arguments. \
                 Got {got}, Expected {expected}."
            ),
            Self::TypeMismatch {
                function,
                index,
                expected,
                got,
            } => write!(
                f,
                "Function '{function}' passed incorrect type for argument {index}. \
                 Got {got}, Expected {expected}."
            ),
            Self::EmptyList { function } => write!(f, "Function '{function}' passed {{}}!"),

            Self::DefineNonSymbol { index, got } => write!(
                f,
                "Function 'def' cannot define non-symbol at position {index}. \
                 Got {got}, Expected Symbol."
            ),
            Self::DefineCountMismatch { symbols, values } => write!(
                f,
                "Function 'def' passed incorrect number of values for symbols. \
                 Got {values}, Expected {symbols}."
            ),

            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message.
    ///
    /// For factory-created errors, this equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    /// Create an error with just a message.
    ///
    /// Uses `Custom` kind. Prefer the factory functions when a structured
    /// kind exists.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: message.clone(),
            },
            message,
        }
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Arithmetic Errors

/// Division or modulo by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// Checked arithmetic left the `i64` range.
#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

/// Exponentiation with a negative exponent.
#[cold]
pub fn negative_exponent(function: &'static str, index: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NegativeExponent { function, index })
}

// Reading Errors

/// A number literal that does not fit a signed 64-bit integer.
#[cold]
pub fn invalid_number(literal: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidNumber {
        literal: literal.to_string(),
    })
}

// Lookup and Application Errors

/// Symbol with no binding in the environment.
#[cold]
pub fn unbound_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundSymbol {
        name: name.to_string(),
    })
}

/// Head of an S-Expression evaluated to something other than a function.
#[cold]
pub fn not_a_function(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction { type_name })
}

// Built-in Argument Errors

/// Wrong number of arguments passed to a built-in.
#[cold]
pub fn wrong_arg_count(function: &'static str, expected: Arity, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        function,
        expected,
        got,
    })
}

/// Argument at `index` has the wrong type.
#[cold]
pub fn wrong_arg_type(
    function: &'static str,
    index: usize,
    expected: &'static str,
    got: &'static str,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        function,
        index,
        expected,
        got,
    })
}

/// A list operation that needs at least one element got `{}`.
#[cold]
pub fn empty_list(function: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyList { function })
}

// Binding Errors

/// `def` symbol list contains a non-symbol at `index`.
#[cold]
pub fn define_non_symbol(index: usize, got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DefineNonSymbol { index, got })
}

/// `def` received a different number of values than symbols.
#[cold]
pub fn define_count_mismatch(symbols: usize, values: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DefineCountMismatch { symbols, values })
}
