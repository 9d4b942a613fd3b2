//! Console Layer (non-deterministic edge)
//!
//! Everything that touches stdin/stdout lives here. The session drives the
//! pure core through a small menu state machine; the table module renders
//! the full outcome matrix on demand.
//!
//! - `session`: one-round menu loop, commitment display, key reveal
//! - `table`: N×N help table, recomputed from the resolver each time

pub mod session;
pub mod table;

// Re-export key types
pub use session::Session;
pub use table::render;
