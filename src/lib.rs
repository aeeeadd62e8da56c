//! SHA-1 hashing and repeatable randomness
//!
//! This crate provides a from-scratch SHA-1 engine and builds a
//! deterministic pseudorandom number generator on top of it, together with
//! a small concurrency layer that lets many threads share one generator.
//!
//! The focus is on **clarity, determinism, and testability**. Nothing here
//! is hardened against collision or timing attacks; SHA-1 is used as a
//! well-specified mixing function, not as a security primitive.
//!
//! # Module overview
//!
//! - `hash`
//!   The SHA-1 engine. [`hash::Sha1`] accepts input in arbitrary pieces
//!   (including messages whose bit length does not fit in 32 bits) and
//!   produces a [`hash::Digest`]. One-shot helpers hash byte slices,
//!   strings and readers. Digests render as `0x`-prefixed uppercase hex
//!   or standard base64 for display.
//!
//! - `rng`
//!   Repeatable randomness. [`rng::ShaRing`] treats the chain
//!   `SHA1(seed), SHA1(SHA1(seed)), ...` as an endless keystream and cuts
//!   it into 64-bit words or exact bit-width byte strings, using every
//!   keystream byte exactly once. The [`rng::Source`] and
//!   [`rng::BitSource`] capabilities describe what the rest of the crate
//!   needs from a generator; any `rand_core` generator can be adapted.
//!
//! - `distribution`
//!   Concurrent fan-out. A [`distribution::SafeRandom`] runs a background
//!   production loop that feeds a bounded channel; any number of consumers
//!   receive from it and each value reaches exactly one of them. A
//!   [`distribution::Distributor`] keeps one such channel per bit width
//!   over a single shared generator.
//!
//! # Design goals
//!
//! - Same seed, same sequence
//! - Engines reusable without reallocation
//! - Internal invariant violations fail loudly instead of producing a
//!   wrong digest
//! - No locking required of consumers

pub mod distribution;
pub mod hash;
pub mod rng;
