//! Nondeterministic finite automaton over single characters
//!
//! An [Automaton] is assembled by hand: states are plain integers tagged as start and/or accept,
//! and transitions map a `(state, char)` pair to a set of destination states. There are no
//! epsilon transitions.
//!
//! Simulation is subset construction done on the fly. The automaton keeps the set of states it
//! currently occupies; [Automaton::apply] replaces that set with the union of the destinations
//! reachable on one character. Nothing is determinized or cached between steps.
//!
//! Lifecycle
//!
//!     An automaton is built once (add_state / add_transition) and then driven through many
//!     reset / apply cycles, one per token scan. The live configuration belongs to whichever scan
//!     is in progress; two scans must never interleave on the same instance. Clone the automaton
//!     to get an independent configuration.

use std::collections::{HashMap, HashSet};

/// Identifier for an automaton state
pub type StateId = u32;

/// A set of automaton states
pub type StateSet = HashSet<StateId>;

/// An NFA whose transitions are labelled with single characters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Automaton {
    /// Every state id mentioned by add_state or add_transition
    states: StateSet,
    start_states: StateSet,
    accept_states: StateSet,
    /// (source, label) -> destinations. Repeated calls accumulate.
    transitions: HashMap<(StateId, char), StateSet>,
    /// Live configuration; only reset and apply touch it
    current_states: StateSet,
}

impl Automaton {
    /// Create an automaton with no states and an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a state. Flags only accumulate: passing `false` never clears an earlier `true`.
    pub fn add_state(&mut self, state: StateId, is_start: bool, is_accept: bool) {
        self.states.insert(state);
        if is_start {
            self.start_states.insert(state);
        }
        if is_accept {
            self.accept_states.insert(state);
        }
    }

    /// Add `to` to the destinations of `(from, label)`.
    ///
    /// The same `(from, label)` may lead to several states.
    pub fn add_transition(&mut self, from: StateId, label: char, to: StateId) {
        self.states.insert(from);
        self.states.insert(to);
        self.transitions.entry((from, label)).or_default().insert(to);
    }

    /// Return to the start configuration. The start set is copied, not shared.
    pub fn reset(&mut self) {
        self.current_states = self.start_states.clone();
    }

    /// Advance every live state on `label`.
    ///
    /// States without a transition on `label` simply drop out. Applying to a dead configuration
    /// is legal and leaves it dead.
    pub fn apply(&mut self, label: char) {
        let next: StateSet = self
            .current_states
            .iter()
            .filter_map(|&state| self.transitions.get(&(state, label)))
            .flatten()
            .copied()
            .collect();
        self.current_states = next;
    }

    /// True when the live configuration contains an accept state
    pub fn accepts(&self) -> bool {
        self.current_states
            .iter()
            .any(|state| self.accept_states.contains(state))
    }

    /// True when some live state can move on `label`. Does not change the configuration.
    pub fn has_transitions(&self, label: char) -> bool {
        self.current_states.iter().any(|&state| {
            self.transitions
                .get(&(state, label))
                .is_some_and(|destinations| !destinations.is_empty())
        })
    }

    /// True when no state is live
    pub fn is_dead(&self) -> bool {
        self.current_states.is_empty()
    }

    /// Run the whole of `input` from the start configuration and report acceptance.
    ///
    /// This leaves the automaton in the configuration reached after the last character.
    pub fn matches(&mut self, input: &str) -> bool {
        self.reset();
        for label in input.chars() {
            if self.is_dead() {
                return false;
            }
            self.apply(label);
        }
        self.accepts()
    }

    pub fn states(&self) -> &StateSet {
        &self.states
    }

    pub fn start_states(&self) -> &StateSet {
        &self.start_states
    }

    pub fn accept_states(&self) -> &StateSet {
        &self.accept_states
    }

    pub fn current_states(&self) -> &StateSet {
        &self.current_states
    }

    /// Number of distinct `(state, label)` keys with at least one destination
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}
