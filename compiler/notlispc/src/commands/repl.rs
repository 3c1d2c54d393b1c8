//! Interactive read-eval-print loop.

use std::io::BufRead;

use notlisp_eval::Interpreter;
use tracing::debug;

use super::CommandError;
use crate::report::render_parse_error;

pub const PROMPT: &str = "not-lisp > ";

#[derive(Clone, Copy, Debug)]
pub struct ReplOptions {
    /// Print the version banner before the first prompt.
    pub banner: bool,
    /// Colorize syntax-error reports.
    pub color: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        ReplOptions {
            banner: true,
            color: false,
        }
    }
}

/// Prompt, read a line, evaluate it and print the result until `input` ends.
///
/// Error values are ordinary results. Syntax errors are reported and the
/// loop carries on.
pub fn repl<R: BufRead>(
    mut input: R,
    interp: &mut Interpreter,
    options: ReplOptions,
) -> Result<(), CommandError> {
    let out = interp.print_handler().clone();
    if options.banner {
        out.println(&format!("not-lisp {}", env!("CARGO_PKG_VERSION")));
        out.println("Press Ctrl+D to exit");
        out.println("");
    }

    let mut line = String::new();
    loop {
        out.print(PROMPT);
        line.clear();
        if input.read_line(&mut line)? == 0 {
            out.println("");
            debug!("end of input");
            return Ok(());
        }

        let source = line.trim_end_matches(['\n', '\r']);
        if let Err(error) = interp.run_line(source) {
            out.print(&render_parse_error("<stdin>", source, &error, options.color));
        }
    }
}
