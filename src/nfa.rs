use std::fmt;

use crate::error::BuildError;
use crate::matcher;
use crate::parser::Parser;
use crate::state::{Node, State, StateID};

/// A compiled pattern: an arena of states wired together by transitions.
///
/// An automaton is built once and never changes afterwards, so it can be
/// shared freely (it is `Send + Sync`) and matched against any number of
/// inputs.
///
/// # Example
///
/// ```
/// use regex_fsm::Automaton;
///
/// let re = Automaton::new("a*4.+hi")?;
/// assert!(re.is_match("aaaaaa4uhi"));
/// assert!(!re.is_match("4hi"));
/// # Ok::<(), regex_fsm::BuildError>(())
/// ```
#[derive(Clone)]
pub struct Automaton {
    nodes: Vec<Node>,
    start: StateID,
    termination: StateID,
}

impl Automaton {
    /// Build an automaton from `pattern`.
    pub fn new(pattern: &str) -> Result<Automaton, BuildError> {
        Parser::new(pattern).build()
    }

    pub(crate) fn from_parts(
        nodes: Vec<Node>,
        start: StateID,
        termination: StateID,
    ) -> Automaton {
        Automaton {
            nodes,
            start,
            termination,
        }
    }

    /// Whether `input` is matched in full by this automaton.
    pub fn is_match(&self, input: &str) -> bool {
        matcher::matches(self, input)
    }

    pub fn start(&self) -> StateID {
        self.start
    }

    pub fn termination(&self) -> StateID {
        self.termination
    }

    /// The total number of states, sentinels included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: even the empty pattern has a start and a termination.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn state(&self, id: StateID) -> &State {
        &self.nodes[id.as_usize()].state
    }

    /// The outgoing transitions of `id`, in the order they are tried.
    pub fn next(&self, id: StateID) -> &[StateID] {
        &self.nodes[id.as_usize()].next
    }

    /// Whether the state `id` consumes `c`. Repeat states answer for their
    /// inner atom.
    pub fn accepts(&self, id: StateID, c: char) -> bool {
        let state = self.state(id);
        match state.accepts(c) {
            Some(yes) => yes,
            None => match *state {
                State::Repeat { inner, .. } => self.accepts(inner, c),
                _ => unreachable!("only repeat states defer acceptance"),
            },
        }
    }

    /// An iterator over every state ID, in construction order.
    pub fn state_ids(&self) -> impl Iterator<Item = StateID> + '_ {
        (0..self.nodes.len()).map(StateID::new)
    }
}

impl fmt::Debug for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Automaton(")?;
        for id in self.state_ids() {
            let marker = if id == self.start { '>' } else { ' ' };
            write!(f, "{}{}: {}", marker, id, self.state(id))?;
            let next = self.next(id);
            if !next.is_empty() {
                write!(f, " =>")?;
                for (i, target) in next.iter().enumerate() {
                    let sep = if i == 0 { " " } else { ", " };
                    write!(f, "{}{}", sep, target)?;
                }
            }
            writeln!(f)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RepeatKind;

    #[test]
    fn empty_pattern_links_start_to_termination() {
        let re = Automaton::new("").unwrap();
        assert_eq!(re.len(), 2);
        assert!(!re.is_empty());
        assert_eq!(re.next(re.start()), &[re.termination()]);
        assert!(re.next(re.termination()).is_empty());
    }

    #[test]
    fn repeat_acceptance_goes_through_inner() {
        let re = Automaton::new("[0-9]+").unwrap();
        let repeat = re.next(re.start())[0];
        assert!(matches!(
            re.state(repeat),
            State::Repeat {
                kind: RepeatKind::OneOrMore,
                ..
            }
        ));
        assert!(re.accepts(repeat, '7'));
        assert!(!re.accepts(repeat, 'x'));
        assert!(!re.accepts(re.start(), '7'));
    }

    #[test]
    fn debug_lists_every_state() {
        let re = Automaton::new("ab*").unwrap();
        let got = format!("{:?}", re);
        let expected = "\
Automaton(
>000: start => 002
 001: termination
 002: literal('a') => 004
 003: literal('b') => 004
 004: repeat(003*) => 003, 001
)";
        assert_eq!(got, expected);
    }

    #[test]
    fn automaton_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Automaton>();
    }
}
