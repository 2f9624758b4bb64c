//! Main module for munch library functionality
//!
//! The pipeline is split the same way the data flows:
//!
//!     automaton   A single NFA, built by hand from states and transitions.
//!     lexer       Maximal-munch tokenization over an ordered set of automata, plus the
//!                 reference grammar for arithmetic.
//!     parser      Recursive descent over the token sequence, producing an [ast::Expr].
//!     formats     Serializers for the expression tree (tag, treeviz).
//!     processor   Stage/format driven processing used by the binary.
//!
//! [parse_source] and [evaluate_source] wire the reference lexer and the parser together for
//! callers that just want a tree or a number.

pub mod ast;
pub mod automaton;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod testing;

pub use ast::{BinaryOp, Expr};
pub use automaton::Automaton;
pub use error::{FrontendError, LexError, ParseError};
pub use lexer::{reference_lexer, Lexer, Token, TokenKind, TokenSequence};

/// Tokenize `source` with the reference grammar and parse it into an expression tree.
pub fn parse_source(source: &str) -> Result<Expr, FrontendError> {
    let tokens = reference_lexer().tokenize(source)?;
    Ok(parser::parse(&tokens)?)
}

/// Parse `source` and evaluate the resulting tree.
pub fn evaluate_source(source: &str) -> Result<f64, FrontendError> {
    parse_source(source).map(|expr| expr.eval())
}
