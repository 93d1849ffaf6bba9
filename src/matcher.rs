use crate::nfa::Automaton;
use crate::state::{RepeatKind, State, StateID};

/// Whether `input` is matched in full by `nfa`.
///
/// This is a plain backtracking search with no memoization, so it can take
/// exponential time on pathological pattern and input pairs.
pub fn matches(nfa: &Automaton, input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();
    let search = Search { nfa, input: &chars };
    let matched = nfa
        .next(nfa.start())
        .iter()
        .any(|&first| search.explore(first, 0, false));
    debug!("match of {:?}: {}", input, matched);
    matched
}

struct Search<'a> {
    nfa: &'a Automaton,
    input: &'a [char],
}

impl Search<'_> {
    // `looped` is true when `id` was reached over the back-edge from its own
    // inner atom, i.e. the repeated atom has matched at least once already.
    fn explore(&self, id: StateID, pos: usize, looped: bool) -> bool {
        let state = self.nfa.state(id);
        if *state == State::Termination {
            return pos == self.input.len();
        }

        if pos < self.input.len()
            && self.nfa.accepts(id, self.input[pos])
            && self.advance(id, pos + 1)
        {
            return true;
        }

        // The exit branch: leave a repeat without consuming anything. A `+`
        // only gets to take it once its atom has matched.
        if let State::Repeat { kind, .. } = *state {
            if kind == RepeatKind::ZeroOrMore || looped {
                return self.advance(id, pos);
            }
        }
        false
    }

    fn advance(&self, from: StateID, pos: usize) -> bool {
        self.nfa.next(from).iter().any(|&to| {
            let looped = matches!(
                *self.nfa.state(to),
                State::Repeat { inner, .. } if inner == from
            );
            self.explore(to, pos, looped)
        })
    }
}
