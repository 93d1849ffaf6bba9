use std::collections::BTreeSet;

use crate::error::BuildError;
use crate::nfa::Automaton;
use crate::state::{Node, RepeatKind, State, StateID};

/// Build an automaton from `pattern`.
pub fn build(pattern: &str) -> Result<Automaton, BuildError> {
    Parser::new(pattern).build()
}

/// Parser that turns a pattern into an automaton in a single left to right
/// scan.
///
/// The `Parser` owns the state arena while it is being filled in, plus the
/// construction history: the states appended so far, in order. The last entry
/// of the history is the current tail, which the next atom gets linked from.
pub struct Parser {
    pattern: Vec<char>,
    pos: usize,
    nodes: Vec<Node>,
    history: Vec<StateID>,
    start: StateID,
    termination: StateID,
}

impl Parser {
    /// Create a new parser for the given pattern.
    pub fn new(pattern: &str) -> Self {
        let mut parser = Self {
            pattern: pattern.chars().collect(),
            pos: 0,
            nodes: Vec::new(),
            history: Vec::new(),
            start: StateID::new(0),
            termination: StateID::new(0),
        };
        parser.start = parser.add(State::Start);
        parser.termination = parser.add(State::Termination);
        parser.history.push(parser.start);
        parser
    }

    /// Peek at the next character in the pattern without advancing.
    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    /// Peek `offset` characters past the current position.
    fn peek_at(&self, offset: usize) -> Option<char> {
        self.pattern.get(self.pos + offset).copied()
    }

    /// Advance the parser by one character and return it.
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    /// Expect a specific character and advance if it matches.
    fn expect(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn add(&mut self, state: State) -> StateID {
        let id = StateID::new(self.nodes.len());
        trace!("adding state {}: {}", id, state);
        self.nodes.push(Node::new(state));
        id
    }

    fn tail(&self) -> StateID {
        // The start state is pushed in `new` and never popped.
        self.history[self.history.len() - 1]
    }

    fn link(&mut self, from: StateID, to: StateID) {
        self.nodes[from.as_usize()].next.push(to);
    }

    /// Consume the whole pattern and return the finished automaton.
    ///
    /// Example:
    /// - Pattern: `ab` → start → literal('a') → literal('b') → termination
    /// - Pattern: `a*` → start → repeat(a*) ⇄ literal('a'), repeat → termination
    pub fn build(mut self) -> Result<Automaton, BuildError> {
        while let Some(ch) = self.peek() {
            if RepeatKind::from_char(ch).is_some() {
                // A quantifier that directly follows an atom is consumed by
                // `parse_repeat`, so reaching one here means it has nothing
                // to apply to.
                return Err(BuildError::InvalidPattern {
                    quantifier: ch,
                    position: self.pos,
                });
            }
            let atom = self.parse_atom()?;
            let tail = self.tail();
            self.link(tail, atom);
            self.history.push(atom);
            self.parse_repeat(atom);
        }
        let tail = self.tail();
        let termination = self.termination;
        self.link(tail, termination);
        debug!(
            "built automaton with {} states from {} pattern characters",
            self.nodes.len(),
            self.pattern.len(),
        );
        Ok(Automaton::from_parts(self.nodes, self.start, self.termination))
    }

    /// Parse a single atom and add its state: a class, a wildcard or a
    /// literal.
    ///
    /// Examples:
    /// - Pattern: `[abc]` → CharClass { chars: {'a','b','c'}, negated: false }
    /// - Pattern: `.`     → Wildcard
    /// - Pattern: `a`     → Literal('a')
    fn parse_atom(&mut self) -> Result<StateID, BuildError> {
        let state = match self.peek() {
            Some('[') => self.parse_char_class()?,
            Some('.') => {
                self.advance();
                State::Wildcard
            }
            Some(c) => {
                self.advance();
                State::Literal(c)
            }
            None => unreachable!("parse_atom called at end of pattern"),
        };
        Ok(self.add(state))
    }

    /// Wrap `atom` in a repeat state if a quantifier follows it.
    ///
    /// The atom is popped off the history and replaced by the repeat state.
    /// The predecessor that pointed at the atom is found by searching the
    /// history backwards and is retargeted at the repeat state. The repeat
    /// state enters the atom, and the atom loops back to the repeat state.
    ///
    /// Example:
    /// - Pattern: `a+` → start → repeat(a+) → literal('a') → repeat(a+)
    fn parse_repeat(&mut self, atom: StateID) {
        let Some(kind) = self.peek().and_then(RepeatKind::from_char) else {
            return;
        };
        self.advance();

        let popped = self.history.pop();
        debug_assert_eq!(popped, Some(atom));
        let repeat = self.add(State::Repeat { kind, inner: atom });
        self.link(repeat, atom);
        self.link(atom, repeat);

        let nodes = &mut self.nodes;
        for &pred in self.history.iter().rev() {
            let next = &mut nodes[pred.as_usize()].next;
            if let Some(slot) = next.iter_mut().find(|target| **target == atom) {
                trace!("rewiring {} -> {} to {} -> {}", pred, atom, pred, repeat);
                *slot = repeat;
                break;
            }
        }
        self.history.push(repeat);
    }

    /// Parse a character class, e.g. `[abc]`, `[^abc]` or `[a-z0-9]`.
    ///
    /// Examples:
    /// - Pattern: `[abc]`   → CharClass { chars: {'a','b','c'}, negated: false }
    /// - Pattern: `[^xyz]`  → CharClass { chars: {'x','y','z'}, negated: true }
    /// - Pattern: `[a-c_]`  → CharClass { chars: {'_','a','b','c'}, negated: false }
    fn parse_char_class(&mut self) -> Result<State, BuildError> {
        let open = self.pos;
        let _ = self.advance(); // consume '['
        let negated = self.expect('^');
        let mut chars = BTreeSet::new();
        loop {
            let Some(ch) = self.peek() else {
                return Err(BuildError::UnclosedCharacterClass { position: open });
            };
            if ch == ']' {
                break;
            }
            let is_range =
                self.peek_at(1) == Some('-') && matches!(self.peek_at(2), Some(end) if end != ']');
            if is_range {
                let position = self.pos;
                let start = ch;
                self.pos += 2;
                let end = self.advance().unwrap_or(start);
                if start > end {
                    return Err(BuildError::InvalidClassRange {
                        start,
                        end,
                        position,
                    });
                }
                chars.extend(start..=end);
            } else {
                chars.insert(ch);
                self.advance();
            }
        }
        let _ = self.expect(']');
        Ok(State::CharClass { chars, negated })
    }
}
