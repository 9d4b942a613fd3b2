//! Core game logic.
//!
//! Pure, deterministic, and free of I/O. The CLI layer feeds this module
//! validated inputs and renders its outputs.
//!
//! - `moves`: validated move set and 1-based move indices
//! - `outcome`: circular win/lose/draw resolution

pub mod moves;
pub mod outcome;

// Re-export core types
pub use moves::{MoveIndex, MoveSet, MoveSetError};
pub use outcome::{determine, try_determine, OutcomeError, Verdict};
