//! Validated Move Set
//!
//! The ordered list of move names for one session, indexed 1..N. All
//! validation happens in the constructor, so downstream code never sees an
//! even count, a count below 3, a blank name, or a case-insensitive
//! duplicate. A [`MoveIndex`] can only be obtained from its set, so a held
//! index is always in range.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of moves for a playable cycle.
pub const MIN_MOVES: usize = 3;

/// Reasons a move list is rejected.
///
/// Variants map 1:1 onto the CLI usage errors; all exit the process with
/// code 1 before any session state exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveSetError {
    /// No move names were given at all.
    #[error("please provide at least 3 unique move names, an odd number of them. Example: fair-rps Rock Paper Scissors")]
    Empty,

    /// Fewer than [`MIN_MOVES`] names.
    #[error("not enough arguments: got {got}, need at least {MIN_MOVES} move names")]
    TooFew {
        /// How many names were given.
        got: usize,
    },

    /// An even number of names.
    #[error("the number of moves must be odd, got {got}")]
    EvenCount {
        /// How many names were given.
        got: usize,
    },

    /// A name was empty or whitespace-only.
    #[error("move names must be non-empty: argument {position} is blank")]
    BlankName {
        /// 1-based position of the blank argument.
        position: usize,
    },

    /// Two names collide ignoring case.
    #[error("move names must be unique: {name:?} appears more than once (ignoring case)")]
    Duplicate {
        /// The colliding name as first given.
        name: String,
    },
}

/// A 1-based index into a [`MoveSet`].
///
/// Only produced by [`MoveSet::index`] and [`MoveSet::parse_selection`],
/// so it is always in range for the set that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIndex(usize);

impl MoveIndex {
    /// The raw 1-based index.
    pub fn get(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for MoveIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered, validated move names for one session. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Validate and build a move set.
    ///
    /// Checks run in the order the CLI reports them: empty list, too few,
    /// even count, blank names, case-insensitive duplicates.
    pub fn new<I, S>(names: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return Err(MoveSetError::Empty);
        }
        if names.len() < MIN_MOVES {
            return Err(MoveSetError::TooFew { got: names.len() });
        }
        if names.len() % 2 == 0 {
            return Err(MoveSetError::EvenCount { got: names.len() });
        }
        if let Some(position) = names.iter().position(|name| name.trim().is_empty()) {
            return Err(MoveSetError::BlankName { position: position + 1 });
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.to_lowercase()) {
                return Err(MoveSetError::Duplicate { name: name.clone() });
            }
        }

        Ok(Self { names })
    }

    /// Number of moves (always odd, ≥ 3).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed set; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The name at a validated index.
    pub fn name(&self, index: MoveIndex) -> &str {
        &self.names[index.0 - 1]
    }

    /// Turn a raw 1-based index into a validated one.
    pub fn index(&self, raw: usize) -> Option<MoveIndex> {
        (1..=self.len()).contains(&raw).then_some(MoveIndex(raw))
    }

    /// Parse a menu selection line into a move index.
    ///
    /// Accepts a decimal integer in `[1, N]`, ignoring surrounding
    /// whitespace. Anything else (including `0`, which the menu treats as
    /// quit) is `None`.
    pub fn parse_selection(&self, input: &str) -> Option<MoveIndex> {
        input.trim().parse::<usize>().ok().and_then(|raw| self.index(raw))
    }

    /// Iterate names in menu order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> MoveSet {
        MoveSet::new(["Rock", "Paper", "Scissors"]).unwrap()
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(MoveSet::new(Vec::<String>::new()), Err(MoveSetError::Empty));
    }

    #[test]
    fn test_rejects_too_few() {
        assert_eq!(MoveSet::new(["Rock"]), Err(MoveSetError::TooFew { got: 1 }));
        assert_eq!(
            MoveSet::new(["Rock", "Paper"]),
            Err(MoveSetError::TooFew { got: 2 })
        );
    }

    #[test]
    fn test_rejects_even_count() {
        assert_eq!(
            MoveSet::new(["Rock", "Paper", "Scissors", "Lizard"]),
            Err(MoveSetError::EvenCount { got: 4 })
        );
    }

    #[test]
    fn test_rejects_case_insensitive_duplicate() {
        assert_eq!(
            MoveSet::new(["Rock", "rock", "Paper"]),
            Err(MoveSetError::Duplicate { name: "rock".to_string() })
        );
    }

    #[test]
    fn test_rejects_blank_name() {
        assert_eq!(
            MoveSet::new(["Rock", "  ", "Paper"]),
            Err(MoveSetError::BlankName { position: 2 })
        );
    }

    #[test]
    fn test_accepts_five_unique() {
        let set = MoveSet::new(["Rock", "Paper", "Scissors", "Lizard", "Spock"]).unwrap();
        assert_eq!(set.len(), 5);
        assert_eq!(set.name(set.index(4).unwrap()), "Lizard");
    }

    #[test]
    fn test_index_bounds() {
        let set = classic();
        assert!(set.index(0).is_none());
        assert!(set.index(1).is_some());
        assert!(set.index(3).is_some());
        assert!(set.index(4).is_none());
    }

    #[test]
    fn test_parse_selection() {
        let set = classic();
        assert_eq!(set.parse_selection("2").map(MoveIndex::get), Some(2));
        assert_eq!(set.parse_selection(" 3 ").map(MoveIndex::get), Some(3));
        assert!(set.parse_selection("0").is_none());
        assert!(set.parse_selection("4").is_none());
        assert!(set.parse_selection("-1").is_none());
        assert!(set.parse_selection("rock").is_none());
        assert!(set.parse_selection("").is_none());
        assert!(set.parse_selection("2.5").is_none());
    }

    #[test]
    fn test_menu_order_preserved() {
        let set = classic();
        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, ["Rock", "Paper", "Scissors"]);
    }
}
