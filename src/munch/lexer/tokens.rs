//! Token definitions
//!
//! [Token] is generic over its kind so the lexer can be configured with any closed set of token
//! kinds. [TokenKind] is the set used by the reference arithmetic grammar and the parser.

use crate::munch::ast::Position;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Token kinds of the reference arithmetic grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// `[0-9]*\.[0-9]+`
    Num,
    Plus,
    Minus,
    Times,
    Div,
    LParen,
    RParen,
    /// `(' '|\n|\r|\t)*`, ignorable
    Whitespace,
}

impl TokenKind {
    /// Short lowercase tag used by the simple token format
    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::Num => "num",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Times => "times",
            TokenKind::Div => "div",
            TokenKind::LParen => "lparen",
            TokenKind::RParen => "rparen",
            TokenKind::Whitespace => "whitespace",
        }
    }

    pub fn is_additive(&self) -> bool {
        matches!(self, TokenKind::Plus | TokenKind::Minus)
    }

    pub fn is_multiplicative(&self) -> bool {
        matches!(self, TokenKind::Times | TokenKind::Div)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Num => "number",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Times => "'*'",
            TokenKind::Div => "'/'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Whitespace => "whitespace",
        };
        write!(f, "{}", name)
    }
}

/// A lexeme recognised by one of the lexer's patterns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token<K = TokenKind> {
    pub kind: K,
    pub lexeme: String,
    /// Byte range of the lexeme in the input
    pub span: Range<usize>,
    /// Line/column of the first byte
    pub position: Position,
}

impl<K> Token<K> {
    pub fn new(kind: K, lexeme: impl Into<String>, span: Range<usize>, position: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
            position,
        }
    }
}

/// Simple format: `<num:3.5>` for numbers, `<plus>` for everything else
impl fmt::Display for Token<TokenKind> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Num => write!(f, "<{}:{}>", self.kind.tag(), self.lexeme),
            _ => write!(f, "<{}>", self.kind.tag()),
        }
    }
}
