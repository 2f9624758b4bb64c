//! # munch
//!
//! A small compiler front-end for arithmetic expressions.
//!
//! Source text flows one way through three stages:
//!
//! ```text
//! source ──► Lexer (N automata, maximal munch) ──► TokenSequence ──► Parser ──► Expr
//! ```
//!
//! - The [automaton](munch::automaton) module is a plain NFA over single characters,
//!   simulated by tracking the set of live states.
//! - The [lexer](munch::lexer) drives one automaton per token kind in lockstep and picks the
//!   longest match, breaking ties by registration order.
//! - The [parser](munch::parser) is a three-level recursive descent over the token sequence.
//!
//! For testing helpers see the [testing module](munch::testing).

pub mod munch;
