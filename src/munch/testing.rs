//! Testing utilities for expression trees and token streams
//!
//! This module provides a fluent API for asserting on parsed trees, plus small helpers for
//! building token sequences by hand (so parser tests need not depend on the lexer).
//!
//! # Example
//!
//! ```rust
//! use munch::munch::{parse_source, testing::assert_expr, BinaryOp};
//!
//! let expr = parse_source("5.0 - 3.0 - 2.0").unwrap();
//!
//! assert_expr(&expr)
//!     .binary(BinaryOp::Sub)
//!     .left(|l| { l.literal(5.0); })
//!     .right(|r| { r.binary(BinaryOp::Sub); });
//! ```

mod assertions;

pub use assertions::{assert_expr, ExprAssertion};

use crate::munch::ast::Position;
use crate::munch::lexer::{Token, TokenKind, TokenSequence};

/// Build a token sequence from `(kind, lexeme)` pairs laid out on one line, one space apart
pub fn token_sequence(pairs: &[(TokenKind, &str)]) -> TokenSequence {
    let mut offset = 0;
    pairs
        .iter()
        .map(|&(kind, lexeme)| {
            let start = offset;
            offset += lexeme.len() + 1;
            Token::new(kind, lexeme, start..start + lexeme.len(), Position::new(0, start))
        })
        .collect()
}

/// Kinds of a token sequence, in order
pub fn kinds(tokens: &TokenSequence) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

/// Lexemes of a token sequence, in order
pub fn lexemes(tokens: &TokenSequence) -> Vec<String> {
    tokens.iter().map(|t| t.lexeme.clone()).collect()
}
