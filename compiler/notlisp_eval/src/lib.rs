#![deny(clippy::arithmetic_side_effects)]
//! not-lisp evaluation.
//!
//! # Architecture
//!
//! - `Environment`: the single global symbol table
//! - `read`: parse tree to `Value`
//! - `eval`: reduce a `Value`, applying built-ins to S-Expressions
//! - `builtins`: the fixed set of built-in operations, dispatched by `Builtin`
//! - `Interpreter`: environment plus print handler, used by the front end
//!
//! Every failure is an `Error` value; nothing here panics on user input.

mod builtins;
mod environment;
pub mod errors;
mod eval;
pub mod interpreter;
mod print_handler;
mod reader;

pub use notlisp_value::{Arity, Builtin, EvalError, EvalErrorKind, EvalResult, Value};

pub use builtins::call;
pub use environment::Environment;
pub use eval::{eval, evaluate, print};
pub use interpreter::Interpreter;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use reader::read;
