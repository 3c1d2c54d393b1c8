//! Run a file line by line in one session.

use notlisp_eval::Interpreter;
use tracing::debug;

use super::{read_input, CommandError};
use crate::report::render_parse_error;

/// Evaluate every non-blank line of `path` and print each result.
pub fn run_file(path: &str, interp: &mut Interpreter, color: bool) -> Result<(), CommandError> {
    let source = read_input(path)?;
    run_source(path, &source, interp, color)
}

/// Evaluate every non-blank line of `source` in order.
///
/// A line that fails to parse is skipped and the remaining lines still run;
/// the collected reports come back as [`CommandError::Syntax`].
pub fn run_source(
    name: &str,
    source: &str,
    interp: &mut Interpreter,
    color: bool,
) -> Result<(), CommandError> {
    let mut report = String::new();
    let mut count = 0usize;

    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match interp.run_line(line) {
            Ok(value) if value.is_error() => debug!(line = index + 1, %value, "error value"),
            Ok(_) => {}
            Err(error) => {
                let location = format!("{name}:{}", index + 1);
                report.push_str(&render_parse_error(&location, line, &error, color));
                count += 1;
            }
        }
    }

    if count == 0 {
        Ok(())
    } else {
        Err(CommandError::Syntax {
            name: name.to_string(),
            count,
            report,
        })
    }
}
