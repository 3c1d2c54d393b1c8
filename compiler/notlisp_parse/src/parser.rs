//! Recursive-descent parser over the lexeme stream.

use notlisp_stack::ensure_sufficient_stack;

use crate::error::ParseError;
use crate::lexer::{lex, Lexeme, Token};
use crate::node::{NodeKind, ParseNode};
use crate::span::Span;

/// Parse a complete input into a `Program` tree.
///
/// The root holds a `Boundary` node, the top-level expressions, and a
/// closing `Boundary` node. Empty input yields a root with only the two
/// boundaries.
pub fn parse(source: &str) -> Result<ParseNode, ParseError> {
    let lexemes = lex(source)?;
    Parser {
        lexemes: &lexemes,
        pos: 0,
    }
    .program(Span::from_range(0..source.len()))
}

struct Parser<'a, 'src> {
    lexemes: &'a [Lexeme<'src>],
    pos: usize,
}

impl<'src> Parser<'_, 'src> {
    #[inline]
    fn peek(&self) -> Option<Lexeme<'src>> {
        self.lexemes.get(self.pos).copied()
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    fn program(mut self, whole: Span) -> Result<ParseNode, ParseError> {
        let mut root = ParseNode::branch(NodeKind::Program, whole);
        root.children
            .push(ParseNode::branch(NodeKind::Boundary, Span::point(0)));

        while let Some(lexeme) = self.peek() {
            root.children.push(self.expr(lexeme)?);
        }

        root.children
            .push(ParseNode::branch(NodeKind::Boundary, Span::point(whole.end)));
        Ok(root)
    }

    /// Parse the expression starting at `lexeme`, the current lexeme.
    fn expr(&mut self, lexeme: Lexeme<'src>) -> Result<ParseNode, ParseError> {
        self.advance();
        match lexeme.token {
            Token::Number => Ok(ParseNode::leaf(NodeKind::Number, lexeme.text, lexeme.span)),
            Token::Symbol => Ok(ParseNode::leaf(NodeKind::Symbol, lexeme.text, lexeme.span)),
            Token::LParen => self.group(lexeme, NodeKind::SExpr),
            Token::LBrace => self.group(lexeme, NodeKind::QExpr),
            Token::RParen | Token::RBrace => Err(ParseError::UnmatchedClose {
                found: bracket(lexeme.token),
                span: lexeme.span,
            }),
        }
    }

    fn group(&mut self, open: Lexeme<'src>, kind: NodeKind) -> Result<ParseNode, ParseError> {
        ensure_sufficient_stack(|| {
            let mut node = ParseNode::branch(kind, open.span);
            node.children.push(delimiter(open));

            loop {
                let Some(lexeme) = self.peek() else {
                    return Err(ParseError::Unclosed {
                        open: bracket(open.token),
                        span: open.span,
                    });
                };

                if Some(lexeme.token) == open.token.closer() {
                    self.advance();
                    node.span = open.span.merge(lexeme.span);
                    node.children.push(delimiter(lexeme));
                    return Ok(node);
                }

                if lexeme.token.is_close() {
                    return Err(ParseError::MismatchedClose {
                        open: bracket(open.token),
                        expected: open.token.closer().map_or(' ', bracket),
                        found: bracket(lexeme.token),
                        span: lexeme.span,
                        open_span: open.span,
                    });
                }

                node.children.push(self.expr(lexeme)?);
            }
        })
    }
}

fn delimiter(lexeme: Lexeme<'_>) -> ParseNode {
    ParseNode::leaf(NodeKind::Delimiter, lexeme.text, lexeme.span)
}

fn bracket(token: Token) -> char {
    token.delimiter().unwrap_or(' ')
}
