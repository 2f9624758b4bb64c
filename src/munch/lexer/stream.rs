//! Persistent token sequence
//!
//! The parser reads tokens through a [TokenSequence]: a singly-linked, immutable list whose
//! empty value marks the end of input. Advancing returns the tail without copying, so any number
//! of views can share a suffix and a parse never mutates the sequence it was given.

use super::tokens::{Token, TokenKind};
use serde::{Serialize, Serializer};
use std::fmt;
use std::rc::Rc;

struct Node<K> {
    token: Token<K>,
    rest: TokenSequence<K>,
}

/// Immutable list of tokens; the empty sequence is end of input
pub struct TokenSequence<K = TokenKind> {
    head: Option<Rc<Node<K>>>,
}

impl<K> TokenSequence<K> {
    /// The end-of-input sequence
    pub fn empty() -> Self {
        Self { head: None }
    }

    /// Prepend `token` to `rest`
    pub fn cons(token: Token<K>, rest: TokenSequence<K>) -> Self {
        Self {
            head: Some(Rc::new(Node { token, rest })),
        }
    }

    /// The lookahead token, or `None` at end of input
    pub fn current(&self) -> Option<&Token<K>> {
        self.head.as_ref().map(|node| &node.token)
    }

    /// Everything after the current token. Advancing past the end stays at the end.
    pub fn advance(&self) -> TokenSequence<K> {
        match &self.head {
            Some(node) => node.rest.clone(),
            None => Self::empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<K: Clone> TokenSequence<K> {
    pub fn to_vec(&self) -> Vec<Token<K>> {
        self.iter().cloned().collect()
    }
}

impl<K> Clone for TokenSequence<K> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
        }
    }
}

impl<K> Default for TokenSequence<K> {
    fn default() -> Self {
        Self::empty()
    }
}

// Unlink iteratively so dropping a long sequence does not recurse once per node
impl<K> Drop for TokenSequence<K> {
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(node) = head {
            match Rc::try_unwrap(node) {
                Ok(mut node) => head = node.rest.head.take(),
                Err(_) => break,
            }
        }
    }
}

impl<K> FromIterator<Token<K>> for TokenSequence<K> {
    fn from_iter<I: IntoIterator<Item = Token<K>>>(iter: I) -> Self {
        let tokens: Vec<Token<K>> = iter.into_iter().collect();
        tokens
            .into_iter()
            .rev()
            .fold(Self::empty(), |rest, token| Self::cons(token, rest))
    }
}

impl<K> From<Vec<Token<K>>> for TokenSequence<K> {
    fn from(tokens: Vec<Token<K>>) -> Self {
        tokens.into_iter().collect()
    }
}

impl<K: fmt::Debug> fmt::Debug for TokenSequence<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K: PartialEq> PartialEq for TokenSequence<K> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<K: Serialize> Serialize for TokenSequence<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Borrowing iterator over a [TokenSequence]
pub struct Iter<'a, K> {
    next: Option<&'a Node<K>>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a Token<K>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.rest.head.as_deref();
            &node.token
        })
    }
}

impl<'a, K> IntoIterator for &'a TokenSequence<K> {
    type Item = &'a Token<K>;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
