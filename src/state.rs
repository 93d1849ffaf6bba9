use std::collections::BTreeSet;
use std::fmt;

/// The identifier of a state in an [`Automaton`](crate::Automaton).
///
/// IDs are indices into the automaton's state arena. They are only meaningful
/// for the automaton that handed them out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateID(usize);

impl StateID {
    pub(crate) fn new(index: usize) -> StateID {
        StateID(index)
    }

    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatKind {
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
}

impl RepeatKind {
    /// Map a quantifier character to its kind.
    pub fn from_char(c: char) -> Option<RepeatKind> {
        match c {
            '*' => Some(RepeatKind::ZeroOrMore),
            '+' => Some(RepeatKind::OneOrMore),
            _ => None,
        }
    }
}

/// A single node of the automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    /// Synthetic entry. Never accepts a character.
    Start,
    /// Synthetic accept marker. Never accepts a character and has no
    /// transitions.
    Termination,
    Literal(char),
    /// `.`
    Wildcard,
    CharClass {
        chars: BTreeSet<char>,
        negated: bool,
    },
    /// A quantified atom. Accepts whatever `inner` accepts.
    Repeat {
        kind: RepeatKind,
        inner: StateID,
    },
}

impl State {
    /// Whether this state consumes `c`.
    ///
    /// Returns `None` for `Repeat`, whose answer lives in the inner state;
    /// callers holding the automaton resolve that through the arena.
    pub fn accepts(&self, c: char) -> Option<bool> {
        match self {
            State::Start | State::Termination => Some(false),
            State::Literal(expected) => Some(*expected == c),
            State::Wildcard => Some(true),
            State::CharClass { chars, negated } => Some(chars.contains(&c) != *negated),
            State::Repeat { .. } => None,
        }
    }

    pub fn is_repeat(&self) -> bool {
        matches!(self, State::Repeat { .. })
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Start => write!(f, "start"),
            State::Termination => write!(f, "termination"),
            State::Literal(c) => write!(f, "literal({:?})", c),
            State::Wildcard => write!(f, "wildcard"),
            State::CharClass { chars, negated } => {
                write!(f, "class(")?;
                if *negated {
                    write!(f, "^")?;
                }
                for c in chars {
                    write!(f, "{}", c.escape_debug())?;
                }
                write!(f, ")")
            }
            State::Repeat { kind, inner } => {
                let op = match kind {
                    RepeatKind::ZeroOrMore => '*',
                    RepeatKind::OneOrMore => '+',
                };
                write!(f, "repeat({}{})", inner, op)
            }
        }
    }
}

/// A state together with its ordered outgoing transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub state: State,
    pub next: Vec<StateID>,
}

impl Node {
    pub(crate) fn new(state: State) -> Node {
        Node {
            state,
            next: Vec::new(),
        }
    }
}
