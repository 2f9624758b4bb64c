//! Maximal-munch lexer over an ordered set of automata
//!
//! Each registered [Pattern] pairs a token kind with an [Automaton]. Registration order is the
//! priority order.
//!
//! Scanning
//!
//!     From the current position every automaton is reset and fed the input one character at a
//!     time, all in lockstep. An automaton with no transition on the next character is dead for
//!     the rest of the attempt, but keeps the longest length at which it accepted. The attempt
//!     ends when every automaton is dead or the input runs out.
//!
//!     The longest recorded length wins; on a tie the earliest-registered pattern wins. Its
//!     lexeme becomes a token (unless the pattern is ignorable) and scanning resumes right after
//!     it.
//!
//! Empty matches
//!
//!     A pattern whose start state accepts (whitespace is the usual one) matches the empty string
//!     everywhere. Only lengths of at least one character are candidates, so an attempt where
//!     nothing but the empty prefix accepts is a lexical error instead of a stalled scan.

use super::stream::TokenSequence;
use super::tokens::{Token, TokenKind};
use crate::munch::ast::SourceLocation;
use crate::munch::automaton::Automaton;
use crate::munch::error::LexError;
use std::fmt;

/// A token kind, the automaton that recognises it, and whether its matches are discarded
#[derive(Debug, Clone)]
pub struct Pattern<K = TokenKind> {
    pub kind: K,
    pub automaton: Automaton,
    pub ignorable: bool,
}

/// The winner of one maximal-munch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Match {
    /// Index of the winning pattern
    pattern: usize,
    /// Length in chars
    len: usize,
}

/// Multi-pattern maximal-munch lexer
#[derive(Debug, Clone)]
pub struct Lexer<K = TokenKind> {
    patterns: Vec<Pattern<K>>,
}

impl<K> Default for Lexer<K> {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }
}

impl<K: Copy + fmt::Debug> Lexer<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pattern at the lowest priority so far
    pub fn register_pattern(&mut self, kind: K, automaton: Automaton, ignorable: bool) {
        self.patterns.push(Pattern {
            kind,
            automaton,
            ignorable,
        });
    }

    /// Builder form of [Lexer::register_pattern]
    pub fn with_pattern(mut self, kind: K, automaton: Automaton, ignorable: bool) -> Self {
        self.register_pattern(kind, automaton, ignorable);
        self
    }

    pub fn patterns(&self) -> &[Pattern<K>] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Tokenize `input`, dropping matches of ignorable patterns.
    ///
    /// Fails on the first position where no pattern matches at least one character. A failed
    /// call returns no tokens at all.
    pub fn tokenize(&mut self, input: &str) -> Result<TokenSequence<K>, LexError> {
        self.scan(input, false).map(TokenSequence::from)
    }

    /// Like [Lexer::tokenize] but keeps ignorable tokens
    pub fn tokenize_raw(&mut self, input: &str) -> Result<TokenSequence<K>, LexError> {
        self.scan(input, true).map(TokenSequence::from)
    }

    fn scan(&mut self, input: &str, keep_ignorable: bool) -> Result<Vec<Token<K>>, LexError> {
        let chars: Vec<(usize, char)> = input.char_indices().collect();
        let location = SourceLocation::new(input);
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            let start = chars[pos].0;
            let found = match self.longest_match(&chars[pos..]) {
                Some(found) => found,
                None => {
                    return Err(LexError {
                        character: chars[pos].1,
                        offset: start,
                        position: location.byte_to_position(start),
                    })
                }
            };

            let end = chars
                .get(pos + found.len)
                .map_or(input.len(), |&(offset, _)| offset);
            let pattern = &self.patterns[found.pattern];
            log::trace!(
                "munch {:?} {:?} at {}..{}",
                pattern.kind,
                &input[start..end],
                start,
                end
            );

            if keep_ignorable || !pattern.ignorable {
                tokens.push(Token::new(
                    pattern.kind,
                    &input[start..end],
                    start..end,
                    location.byte_to_position(start),
                ));
            }
            pos += found.len;
        }

        log::debug!(
            "tokenized {} chars into {} tokens with {} patterns",
            chars.len(),
            tokens.len(),
            self.patterns.len()
        );
        Ok(tokens)
    }

    /// Run every automaton in lockstep over `input` and pick the winner
    fn longest_match(&mut self, input: &[(usize, char)]) -> Option<Match> {
        for pattern in &mut self.patterns {
            pattern.automaton.reset();
        }

        let mut alive = vec![true; self.patterns.len()];
        let mut best: Vec<Option<usize>> = vec![None; self.patterns.len()];
        let mut consumed = 0;

        for &(_, ch) in input {
            if !alive.iter().any(|&a| a) {
                break;
            }
            consumed += 1;

            for (i, pattern) in self.patterns.iter_mut().enumerate() {
                if !alive[i] {
                    continue;
                }
                if pattern.automaton.has_transitions(ch) {
                    pattern.automaton.apply(ch);
                    if pattern.automaton.accepts() {
                        best[i] = Some(consumed);
                    }
                } else {
                    alive[i] = false;
                }
            }
        }

        // Strictly-greater keeps the earliest pattern on ties
        let mut winner: Option<Match> = None;
        for (pattern, len) in best.iter().enumerate() {
            if let Some(len) = *len {
                if winner.map_or(true, |w| len > w.len) {
                    winner = Some(Match { pattern, len });
                }
            }
        }
        winner
    }
}
