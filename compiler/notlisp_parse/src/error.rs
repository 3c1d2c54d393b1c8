//! Syntax errors.

use thiserror::Error;

use crate::span::Span;

/// Why an input could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected character '{text}'")]
    UnexpectedCharacter { text: String, span: Span },

    #[error("unmatched closing '{found}'")]
    UnmatchedClose { found: char, span: Span },

    #[error("unclosed '{open}'")]
    Unclosed { open: char, span: Span },

    #[error("expected '{expected}' to close '{open}', found '{found}'")]
    MismatchedClose {
        open: char,
        expected: char,
        found: char,
        span: Span,
        open_span: Span,
    },
}

impl ParseError {
    /// Location of the offending input.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedCharacter { span, .. }
            | ParseError::UnmatchedClose { span, .. }
            | ParseError::Unclosed { span, .. }
            | ParseError::MismatchedClose { span, .. } => *span,
        }
    }

    /// Short text to attach to [`ParseError::span`] in a report.
    pub fn label(&self) -> &'static str {
        match self {
            ParseError::UnexpectedCharacter { .. } => "not valid here",
            ParseError::UnmatchedClose { .. } => "nothing to close",
            ParseError::Unclosed { .. } => "opened here but never closed",
            ParseError::MismatchedClose { .. } => "wrong closing bracket",
        }
    }

    /// The opening bracket a mismatched close was paired against.
    pub fn related_span(&self) -> Option<Span> {
        match self {
            ParseError::MismatchedClose { open_span, .. } => Some(*open_span),
            _ => None,
        }
    }
}
