//! Lexer module
//!
//! This module contains the tokenization logic: the maximal-munch driver, the token and token
//! sequence types, and the reference grammar.
//!
//! The driver knows nothing about arithmetic. It is generic over the token kind and is configured
//! by registering (kind, automaton, ignorable) patterns. The arithmetic patterns live in
//! [grammar] and are one configuration among many.

pub mod grammar;
pub mod lexer_impl;
pub mod stream;
pub mod tokens;

pub use grammar::reference_lexer;
pub use lexer_impl::{Lexer, Pattern};
pub use stream::TokenSequence;
pub use tokens::{Token, TokenKind};

use crate::munch::error::LexError;

/// Tokenize `source` with the reference grammar, dropping whitespace
pub fn lex(source: &str) -> Result<TokenSequence, LexError> {
    reference_lexer().tokenize(source)
}

/// Tokenize `source` with the reference grammar, keeping whitespace tokens
pub fn lex_raw(source: &str) -> Result<TokenSequence, LexError> {
    reference_lexer().tokenize_raw(source)
}
