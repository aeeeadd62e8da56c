//! Random number generation module
//!
//! This module provides repeatable pseudorandomness built on the crate's
//! SHA-1 engine.
//!
//! It is built around [`ShaRing`], a generator that treats a chain of
//! SHA-1 digests as an endless keystream, and the [`Source`] /
//! [`BitSource`] capabilities through which the rest of the crate draws
//! values from it (or from any `rand_core` generator).

/// Design goals:
/// - Same seed, same sequence, on every run and platform
/// - Every keystream byte used exactly once
/// - Exact bit-width requests with no stray high bits
/// - Interoperability with `rand_core`
pub mod bits;
mod sha_ring;
mod source;

/// Digest-cycling pseudorandom number generator.
///
/// This type is the primary entry point for generating repeatable
/// randomness within the crate.
pub use sha_ring::ShaRing;
pub use source::{BitSource, Extended, Source, extend};
