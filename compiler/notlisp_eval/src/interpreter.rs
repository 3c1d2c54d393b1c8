//! Interpreter session: one environment and one output handler.

use notlisp_parse::{parse, ParseError};

use notlisp_value::Value;

use crate::environment::Environment;
use crate::eval::{evaluate, print};
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// A running session.
///
/// All inputs evaluated through one `Interpreter` share its environment, so
/// `def` on one line is visible on the next.
pub struct Interpreter {
    env: Environment,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Session with all built-ins, printing to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    #[must_use]
    pub fn with_print_handler(print_handler: SharedPrintHandler) -> Self {
        Interpreter {
            env: Environment::with_builtins(),
            print_handler,
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Parse and evaluate `source` as one program.
    ///
    /// The top level is an implicit S-Expression: `+ 1 2` means `(+ 1 2)`.
    pub fn eval_source(&mut self, source: &str) -> Result<Value, ParseError> {
        let tree = parse(source)?;
        Ok(evaluate(&mut self.env, &tree))
    }

    /// Evaluate one line and print the result, error values included.
    ///
    /// Only syntax errors are returned; the caller decides how to report
    /// them.
    pub fn run_line(&mut self, line: &str) -> Result<Value, ParseError> {
        let value = self.eval_source(line)?;
        self.print_handler.println(&print(&value));
        Ok(value)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
