//! `parse`: dump the parse tree of a file.

use notlisp_parse::parse;

use super::{read_input, CommandError};
use crate::report::render_parse_error;

/// Parse tree of `path` (or stdin for `-`) as an indented dump.
pub fn parse_file(path: &str, color: bool) -> Result<String, CommandError> {
    let source = read_input(path)?;
    parse_source(path, &source, color)
}

pub fn parse_source(name: &str, source: &str, color: bool) -> Result<String, CommandError> {
    match parse(source) {
        Ok(tree) => Ok(tree.dump(source)),
        Err(error) => Err(CommandError::Syntax {
            name: name.to_string(),
            count: 1,
            report: render_parse_error(name, source, &error, color),
        }),
    }
}
