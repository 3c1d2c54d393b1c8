//! Tokenizer built on logos.
//!
//! Whitespace is skipped. Any other character that cannot start a token is
//! reported as [`ParseError::UnexpectedCharacter`].

use logos::Logos;

use crate::error::ParseError;
use crate::span::Span;

/// Token kinds of the surface syntax.
///
/// `Number` and `Symbol` overlap (`5`, `-5`). logos prefers the longest
/// match; on equal length the higher priority of `Number` wins, so `-5` is a
/// number while `-` and `5x` are symbols.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[regex(r"[+-]?([0-9]*\.)?[0-9]+", priority = 3)]
    Number,

    #[regex(r"[a-zA-Z0-9_+\-*/\\=<>!&^%]+")]
    Symbol,
}

impl Token {
    /// The bracket character for delimiter tokens.
    pub fn delimiter(self) -> Option<char> {
        match self {
            Token::LParen => Some('('),
            Token::RParen => Some(')'),
            Token::LBrace => Some('{'),
            Token::RBrace => Some('}'),
            Token::Number | Token::Symbol => None,
        }
    }

    /// Closing token that matches this opening token.
    pub fn closer(self) -> Option<Token> {
        match self {
            Token::LParen => Some(Token::RParen),
            Token::LBrace => Some(Token::RBrace),
            _ => None,
        }
    }

    #[inline]
    pub fn is_close(self) -> bool {
        matches!(self, Token::RParen | Token::RBrace)
    }
}

/// A token together with its location and source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lexeme<'src> {
    pub token: Token,
    pub span: Span,
    pub text: &'src str,
}

/// Split `source` into lexemes, stopping at the first unrecognized character.
pub fn lex(source: &str) -> Result<Vec<Lexeme<'_>>, ParseError> {
    let mut lexer = Token::lexer(source);
    let mut lexemes = Vec::new();

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let text = lexer.slice();
        match result {
            Ok(token) => lexemes.push(Lexeme { token, span, text }),
            Err(()) => {
                return Err(ParseError::UnexpectedCharacter {
                    text: text.to_string(),
                    span,
                })
            }
        }
    }

    Ok(lexemes)
}
