/*!
A small regular expression engine that compiles a pattern into a hand-wired
NFA and decides, by backtracking search, whether an input matches it in full.

Supported syntax: literal characters, `.`, bracketed classes (`[abc]`,
`[^abc]`, `[a-z]`) and the postfix quantifiers `*` and `+`. Matching is
always anchored at both ends.

```
let re = regex_fsm::build("[a-z]+[0-9]*")?;
assert!(re.is_match("abc123"));
assert!(!re.is_match("123"));
# Ok::<(), regex_fsm::BuildError>(())
```
*/

#[macro_use]
mod macros;

pub mod error;
pub mod matcher;
pub mod nfa;
pub mod parser;
pub mod state;

pub use crate::error::BuildError;
pub use crate::nfa::Automaton;
pub use crate::parser::build;
pub use crate::state::{RepeatKind, State, StateID};

/// Build `pattern` and report whether `input` matches it in full.
pub fn is_match(input: &str, pattern: &str) -> Result<bool, BuildError> {
    let nfa = build(pattern)?;
    Ok(matcher::matches(&nfa, input))
}
