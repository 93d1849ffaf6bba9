use thiserror::Error;

/// An error that can occur while building an automaton from a pattern.
///
/// Every variant is fatal to the build: no automaton is produced. Positions
/// are `char` offsets into the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A quantifier (`*` or `+`) with no atom in front of it, e.g. `*abc` or
    /// `a**`.
    #[error("quantifier '{quantifier}' at position {position} has no preceding atom")]
    InvalidPattern { quantifier: char, position: usize },
    /// A `[` that is never closed by a `]`.
    #[error("character class opened at position {position} is never closed")]
    UnclosedCharacterClass { position: usize },
    /// A range inside a class whose start comes after its end, e.g. `[z-a]`.
    #[error("invalid range '{start}-{end}' in character class at position {position}")]
    InvalidClassRange {
        start: char,
        end: char,
        position: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = BuildError::InvalidPattern {
            quantifier: '+',
            position: 0,
        };
        assert_eq!(
            err.to_string(),
            "quantifier '+' at position 0 has no preceding atom"
        );

        let err = BuildError::UnclosedCharacterClass { position: 3 };
        assert_eq!(
            err.to_string(),
            "character class opened at position 3 is never closed"
        );

        let err = BuildError::InvalidClassRange {
            start: 'z',
            end: 'a',
            position: 1,
        };
        assert_eq!(
            err.to_string(),
            "invalid range 'z-a' in character class at position 1"
        );
    }
}
