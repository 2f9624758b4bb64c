//! Parser module
//!
//! Recursive descent with one token of lookahead over three levels:
//!
//!     sum      := product (('+' | '-') sum)?
//!     product  := literal (('*' | '/') product)?
//!     literal  := NUM | '(' sum ')'
//!
//! Each level is one function. The remaining input is an immutable [TokenSequence] that every
//! function takes and hands back advanced, so there is no cursor to share or reset.
//!
//! Associativity
//!
//!     The grammar is right-recursive, so operators of the same level group to the right:
//!     `5-3-2` is `5-(3-2)` and `8/4/2` is `8/(4/2)`. This is the literal grammar, kept as is.
//!
//! Recursion depth grows with the number of chained operators of one level and with
//! parenthesis nesting; there is no fixed limit beyond the call stack.
//!
//! [TokenSequence]: crate::munch::lexer::TokenSequence

pub mod descent;
#[cfg(test)]
mod tests;

pub use descent::{consume, parse};
