//! Error types for lexing and parsing
//!
//! Both stages stop at the first error, left to right, and return it as plain data. A failed
//! stage hands back no partial output.

use crate::munch::ast::Position;
use crate::munch::lexer::TokenKind;
use std::fmt;
use thiserror::Error;

/// No pattern matched a non-empty prefix at `offset`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected character {character:?} at {position}")]
pub struct LexError {
    pub character: char,
    /// Byte offset of the character
    pub offset: usize,
    pub position: Position,
}

/// What the parser was looking for when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Token(TokenKind),
    /// A number or an opening parenthesis
    Operand,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{}", kind),
            Expected::Operand => write!(f, "number or '('"),
        }
    }
}

/// Errors that can occur during parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expected {expected}, found {found} {lexeme:?} at {position}")]
    UnexpectedToken {
        expected: Expected,
        found: TokenKind,
        lexeme: String,
        position: Position,
    },
    #[error("expected {expected}, found end of input")]
    UnexpectedEnd { expected: Expected },
    #[error("unexpected {found} {lexeme:?} at {position} after a complete expression")]
    TrailingToken {
        found: TokenKind,
        lexeme: String,
        position: Position,
    },
    #[error("invalid number {lexeme:?} at {position}")]
    InvalidNumber { lexeme: String, position: Position },
}

impl ParseError {
    /// Where the error happened, if it happened at a token
    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::TrailingToken { position, .. }
            | ParseError::InvalidNumber { position, .. } => Some(*position),
            ParseError::UnexpectedEnd { .. } => None,
        }
    }
}

/// Either stage of the front-end failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrontendError {
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl FrontendError {
    pub fn position(&self) -> Option<Position> {
        match self {
            FrontendError::Lex(err) => Some(err.position),
            FrontendError::Parse(err) => err.position(),
        }
    }
}

/// Format source context around an error position
///
/// Shows 2 lines before the error, the error line with a >> marker and a caret under the
/// column, and 2 lines after. Lines are numbered from 1.
pub fn format_source_context(source: &str, position: Position) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let error_line = position.line;

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for (line_num, line) in lines.iter().enumerate().take(end_line).skip(start_line) {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, line));
        if line_num == error_line {
            context.push_str(&format!("{}^\n", " ".repeat(position.column + 9)));
        }
    }

    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_error_message() {
        let err = LexError {
            character: '@',
            offset: 4,
            position: Position::new(0, 4),
        };
        assert_eq!(err.to_string(), "unexpected character '@' at 0:4");
    }

    #[test]
    fn test_parse_error_messages() {
        let missing = ParseError::UnexpectedEnd {
            expected: Expected::Token(TokenKind::RParen),
        };
        assert_eq!(missing.to_string(), "expected ')', found end of input");

        let operand = ParseError::UnexpectedToken {
            expected: Expected::Operand,
            found: TokenKind::Times,
            lexeme: "*".to_string(),
            position: Position::new(0, 2),
        };
        assert_eq!(
            operand.to_string(),
            "expected number or '(', found '*' \"*\" at 0:2"
        );
        assert_eq!(operand.position(), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_frontend_error_wraps_both_stages() {
        let lex: FrontendError = LexError {
            character: '#',
            offset: 0,
            position: Position::default(),
        }
        .into();
        assert!(lex.to_string().starts_with("lexical error:"));
        assert_eq!(lex.position(), Some(Position::default()));

        let parse: FrontendError = ParseError::UnexpectedEnd {
            expected: Expected::Operand,
        }
        .into();
        assert!(parse.to_string().starts_with("parse error:"));
        assert_eq!(parse.position(), None);
    }

    #[test]
    fn test_format_source_context() {
        let source = "1.0\n+ 2.0\n* 3.0\n+ @\n- 4.0\n/ 5.0\n+ 6.0";
        let context = format_source_context(source, Position::new(3, 2));

        assert!(context.contains("     2 | + 2.0"));
        assert!(context.contains(">>   4 | + @"));
        assert!(context.contains("     6 | / 5.0"));
        assert!(!context.contains("1.0"));
        assert!(!context.contains("6.0"));
        assert!(context.contains(&format!("{}^\n", " ".repeat(11))));
    }
}
