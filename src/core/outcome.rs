//! Circular Win/Lose/Draw Resolution
//!
//! Generalizes rock-paper-scissors to any odd number of moves arranged on
//! a cycle. With N moves, each move loses to the next ⌊N/2⌋ moves clockwise
//! and beats the previous ⌊N/2⌋. The verdict depends only on the circular
//! distance between the two indices, never on their absolute values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of a round from the perspective of a designated "self" party.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Self beats the other move.
    Win,
    /// Self loses to the other move.
    Lose,
    /// Both parties played the same move.
    Draw,
}

impl Verdict {
    /// The same round seen from the other party's side.
    pub fn inverted(self) -> Self {
        match self {
            Verdict::Win => Verdict::Lose,
            Verdict::Lose => Verdict::Win,
            Verdict::Draw => Verdict::Draw,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Win => write!(f, "Win"),
            Verdict::Lose => write!(f, "Lose"),
            Verdict::Draw => write!(f, "Draw"),
        }
    }
}

/// Errors from the checked resolution path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    /// Move count is even or below the minimum of 3.
    #[error("move count must be odd and at least 3, got {n}")]
    InvalidMoveCount {
        /// The rejected move count.
        n: usize,
    },

    /// A move index fell outside `[1, n]`.
    #[error("move index {index} out of range [1, {n}]")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The move count defining the valid range.
        n: usize,
    },
}

/// Resolve a round on a cycle of `n` moves.
///
/// Indices are 1-based. The verdict is for `self_index`.
///
/// Let `half = n / 2`. The signed circular distance from self to other,
/// reduced to `[-half, half]`, decides the round: zero is a draw, a
/// negative distance (other is among the previous `half` moves) is a win
/// for self, a positive distance is a loss.
///
/// Preconditions (`n` odd, `n >= 3`, both indices in `[1, n]`) are the
/// caller's responsibility; a validated [`MoveSet`](crate::MoveSet)
/// guarantees them. Use [`try_determine`] to check them explicitly.
pub fn determine(self_index: usize, other_index: usize, n: usize) -> Verdict {
    debug_assert!(n >= 3 && n % 2 == 1, "move count {} not odd >= 3", n);
    debug_assert!((1..=n).contains(&self_index), "self index {} out of range", self_index);
    debug_assert!((1..=n).contains(&other_index), "other index {} out of range", other_index);

    let half = n / 2;
    // self_index <= n keeps the sum non-negative in unsigned arithmetic.
    let wrapped = (other_index + half + n - self_index) % n;
    match (wrapped as i64 - half as i64).signum() {
        0 => Verdict::Draw,
        -1 => Verdict::Win,
        _ => Verdict::Lose,
    }
}

/// Checked variant of [`determine`] that fails fast on contract violations.
pub fn try_determine(self_index: usize, other_index: usize, n: usize) -> Result<Verdict, OutcomeError> {
    if n < 3 || n % 2 == 0 {
        return Err(OutcomeError::InvalidMoveCount { n });
    }
    for index in [self_index, other_index] {
        if index < 1 || index > n {
            return Err(OutcomeError::IndexOutOfRange { index, n });
        }
    }
    Ok(determine(self_index, other_index, n))
}

// =============================================================================
// TESTS
// =============================================================================
