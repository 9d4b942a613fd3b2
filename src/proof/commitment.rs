//! Move Commitment
//!
//! Binds a secret session key to a chosen move name with HMAC-SHA-256.
//! Published before the human's choice, verified after the key reveal.

use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use thiserror::Error;

use crate::{DIGEST_LEN, KEY_LEN};

type HmacSha256 = Hmac<Sha256>;

/// Errors from the commitment protocol.
#[derive(Debug, Error)]
pub enum CommitmentError {
    /// The OS randomness source failed. Fatal: the session aborts before
    /// any digest is shown, so a digest is never displayed for a move
    /// that was not actually committed.
    #[error("operating system randomness source unavailable")]
    RandomnessUnavailable(#[source] rand::Error),
}

/// 256-bit secret session key.
///
/// Generated once per session, disclosed exactly once after the human
/// commits, never reused. `Debug` redacts the key material.
pub struct SessionKey([u8; KEY_LEN]);

impl SessionKey {
    /// Draw a fresh key from the OS CSPRNG.
    pub fn generate() -> Result<Self, CommitmentError> {
        let mut bytes = [0u8; KEY_LEN];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(CommitmentError::RandomnessUnavailable)?;
        Ok(Self(bytes))
    }

    /// Build a key from raw bytes. Intended for tests and verification of
    /// a finished session; live sessions use [`SessionKey::generate`].
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Disclose the raw key for display and verification.
    ///
    /// Call only after the human has committed to their own move; that
    /// ordering is the entire security property of the protocol.
    pub fn reveal(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// The key as lowercase hex, the form shown to the human.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SessionKey(<redacted>)")
    }
}

/// Keyed one-way binding of a move name (HMAC-SHA-256 output).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// The digest as lowercase hex, the form shown to the human.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a hex string back into a digest.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        let bytes = hex::decode(hex_str).ok()?;
        let bytes: [u8; DIGEST_LEN] = bytes.try_into().ok()?;
        Some(Self(bytes))
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// A published commitment to one move under one session key.
///
/// Computed once per session and never recomputed with a different move
/// for the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveCommitment {
    /// The digest shown to the human before their choice.
    pub digest: Digest,
}

impl MoveCommitment {
    /// Bind `move_name` under `key`.
    ///
    /// Deterministic given (key, move name). Inverting the digest without
    /// the key, or forging a second move with the same digest under the
    /// same key, is as hard as breaking the underlying primitive.
    pub fn bind(key: &SessionKey, move_name: &str) -> Self {
        let mut mac = HmacSha256::new_from_slice(key.reveal())
            .expect("HMAC accepts keys of any length");
        mac.update(move_name.as_bytes());
        let digest: [u8; DIGEST_LEN] = mac.finalize().into_bytes().into();
        Self { digest: Digest(digest) }
    }

    /// Check that `key` and `move_name` reproduce this digest.
    ///
    /// Constant-time comparison via the MAC primitive.
    pub fn verify(&self, key: &SessionKey, move_name: &str) -> bool {
        let mut mac = HmacSha256::new_from_slice(key.reveal())
            .expect("HMAC accepts keys of any length");
        mac.update(move_name.as_bytes());
        mac.verify_slice(&self.digest.0).is_ok()
    }
}

// =============================================================================
// TESTS
// =============================================================================
