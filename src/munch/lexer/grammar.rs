//! Reference grammar for arithmetic expressions
//!
//! Patterns, in priority order:
//!
//!     NUM         [0-9]*\.[0-9]+
//!     PLUS        \+
//!     MINUS       -
//!     TIMES       \*
//!     DIV         /
//!     LPAREN      \(
//!     RPAREN      \)
//!     WHITESPACE  (' '|\n|\r|\t)*     ignorable
//!
//! The automata are built once into a shared read-only table. [reference_lexer] clones them, so
//! every lexer it returns owns its own live configurations.

use super::lexer_impl::{Lexer, Pattern};
use super::tokens::TokenKind;
use crate::munch::automaton::Automaton;
use once_cell::sync::Lazy;

static REFERENCE_PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        pattern(TokenKind::Num, number(), false),
        pattern(TokenKind::Plus, single('+'), false),
        pattern(TokenKind::Minus, single('-'), false),
        pattern(TokenKind::Times, single('*'), false),
        pattern(TokenKind::Div, single('/'), false),
        pattern(TokenKind::LParen, single('('), false),
        pattern(TokenKind::RParen, single(')'), false),
        pattern(TokenKind::Whitespace, whitespace(), true),
    ]
});

/// A fresh lexer for the reference grammar
pub fn reference_lexer() -> Lexer {
    REFERENCE_PATTERNS
        .iter()
        .cloned()
        .fold(Lexer::new(), |lexer, p| {
            lexer.with_pattern(p.kind, p.automaton, p.ignorable)
        })
}

fn pattern(kind: TokenKind, automaton: Automaton, ignorable: bool) -> Pattern {
    Pattern {
        kind,
        automaton,
        ignorable,
    }
}

/// `[0-9]*\.[0-9]+`
///
///     0 start, 1 integer part, 2 seen '.', 3 fraction (accept)
pub fn number() -> Automaton {
    let mut nfa = Automaton::new();
    nfa.add_state(0, true, false);
    nfa.add_state(1, false, false);
    nfa.add_state(2, false, false);
    nfa.add_state(3, false, true);

    for digit in '0'..='9' {
        nfa.add_transition(0, digit, 1);
        nfa.add_transition(1, digit, 1);
    }

    nfa.add_transition(0, '.', 2);
    nfa.add_transition(1, '.', 2);

    for digit in '0'..='9' {
        nfa.add_transition(2, digit, 3);
        nfa.add_transition(3, digit, 3);
    }
    nfa
}

/// Exactly one `symbol`
pub fn single(symbol: char) -> Automaton {
    let mut nfa = Automaton::new();
    nfa.add_state(0, true, false);
    nfa.add_state(1, false, true);
    nfa.add_transition(0, symbol, 1);
    nfa
}

/// `(' '|\n|\r|\t)*`; the start state accepts, so this matches the empty string
pub fn whitespace() -> Automaton {
    let mut nfa = Automaton::new();
    nfa.add_state(0, true, true);
    for ch in [' ', '\n', '\r', '\t'] {
        nfa.add_transition(0, ch, 0);
    }
    nfa
}
