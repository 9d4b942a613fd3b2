//! Fair-Commitment Protocol
//!
//! Lets the computer bind itself to a move before the human chooses,
//! provably without being able to change it afterwards:
//!
//! 1. Generate a fresh 256-bit session key from the OS CSPRNG.
//! 2. Publish `HMAC-SHA-256(key, move_name)` before showing the menu.
//! 3. After the human commits, reveal the key so the digest can be
//!    recomputed and checked against step 2.
//!
//! The reveal-after-commit ordering is enforced by the CLI call sequence,
//! not by this module; the module guarantees the binding itself.

pub mod commitment;

// Re-export key types
pub use commitment::{CommitmentError, Digest, MoveCommitment, SessionKey};
