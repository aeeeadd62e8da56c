//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-1 with a pure-Rust, streaming implementation.

pub mod sha1;

pub use self::sha1::{Digest, Sha1};

/// Re-export of the SHA-1 convenience functions.
pub use self::sha1::{sha1, sha1_reader, sha1_str};

/// A streaming hash engine producing 160-bit digests.
///
/// Engines are fed with [`update`](Hasher::update) and finalized with
/// [`hash`](Hasher::hash), which also returns the engine to its initial
/// state.
pub trait Hasher {
    /// Appends bytes to the message being hashed.
    fn update(&mut self, bytes: &[u8]);

    /// Finalizes the message, returns its digest and resets the engine.
    fn hash(&mut self) -> Digest;

    /// Discards any pending input and restores the initial state.
    fn reset(&mut self);
}
