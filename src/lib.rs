//! # Fair RPS
//!
//! Provably fair generalized rock-paper-scissors for the command line.
//!
//! The game accepts any odd number (≥3) of unique move names and arranges
//! them on a cycle: each move loses to the next ⌊N/2⌋ moves clockwise and
//! beats the previous ⌊N/2⌋. Before the human sees the menu, the computer
//! binds its pre-selected move with an HMAC under a fresh 256-bit key; the
//! key is revealed only after the human commits, so the human can verify
//! the computer never changed its move.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        FAIR RPS                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Pure game logic                          │
//! │  ├── moves.rs    - Validated move set, 1-based indices      │
//! │  └── outcome.rs  - Circular win/lose/draw resolution        │
//! │                                                             │
//! │  proof/          - Fair-commitment protocol                 │
//! │  └── commitment.rs - Session key, HMAC binding, reveal      │
//! │                                                             │
//! │  cli/            - Console I/O (non-deterministic edge)     │
//! │  ├── session.rs  - One-round menu state machine             │
//! │  └── table.rs    - N×N outcome help table                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fairness Guarantee
//!
//! `core/` and `proof/` are deterministic given the session key and the
//! computer's choice. The published digest is an HMAC-SHA-256 over the
//! move name; without the key it reveals nothing about the move, and with
//! the key it binds the computer to exactly one move for the session.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod core;
pub mod proof;

// Re-export commonly used types
pub use self::core::moves::{MoveIndex, MoveSet, MoveSetError};
pub use self::core::outcome::{determine, try_determine, OutcomeError, Verdict};
pub use self::proof::commitment::{CommitmentError, Digest, MoveCommitment, SessionKey};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Session key length in bytes (256 bits)
pub const KEY_LEN: usize = 32;

/// Digest length in bytes (HMAC-SHA-256 output)
pub const DIGEST_LEN: usize = 32;
