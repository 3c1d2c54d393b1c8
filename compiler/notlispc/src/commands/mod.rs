//! CLI commands.
//!
//! Each command returns `Result<_, CommandError>`; the binary decides how to
//! report a failure and which exit code to use.

mod debug;
mod repl;
mod run;

use std::io::{self, Read};

use thiserror::Error;

pub use debug::{parse_file, parse_source};
pub use repl::{repl, ReplOptions, PROMPT};
pub use run::{run_file, run_source};

/// Why a command failed.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("error reading input: {0}")]
    Input(#[from] io::Error),

    /// `report` holds the rendered diagnostics.
    #[error("{count} syntax error(s) in '{name}'")]
    Syntax {
        name: String,
        count: usize,
        report: String,
    },
}

impl CommandError {
    /// Rendered diagnostics to show before the one-line summary, if any.
    pub fn report(&self) -> Option<&str> {
        match self {
            CommandError::Syntax { report, .. } => Some(report),
            CommandError::Read { .. } | CommandError::Input(_) => None,
        }
    }
}

/// Read `path`, or all of stdin when `path` is `-`.
fn read_input(path: &str) -> Result<String, CommandError> {
    if path == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }
    std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_string(),
        source,
    })
}
