//! not-lisp syntax: lexer, parser and the generic parse tree.
//!
//! ```text
//! number : /[+-]?([0-9]*\.)?[0-9]+/ ;
//! symbol : /[a-zA-Z0-9_+\-*\/\\=<>!&^%]+/ ;
//! sexpr  : '(' <expr>* ')' ;
//! qexpr  : '{' <expr>* '}' ;
//! expr   : <number> | <symbol> | <sexpr> | <qexpr> ;
//! program: /^/ <expr>* /$/ ;
//! ```
//!
//! The tree keeps punctuation and input boundaries as explicit nodes so the
//! `parse` command can dump it in full. Consumers that only care about
//! values skip nodes for which [`ParseNode::is_structural`] is true.

mod error;
mod lexer;
mod node;
mod parser;
mod span;

pub use error::ParseError;
pub use lexer::{lex, Lexeme, Token};
pub use node::{NodeKind, ParseNode};
pub use parser::parse;
pub use span::Span;
