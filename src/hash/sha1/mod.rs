//! SHA-1 hash function
//!
//! This module implements the SHA-1 message digest as defined in
//! FIPS 180-4, as a streaming engine that can be fed any number of
//! `update` calls before being finalized.
//!
//! SHA-1 is **not** collision resistant. It is used here as a fast,
//! well-specified mixing function (for content signatures and as the
//! entropy engine of [`ShaRing`](crate::rng::ShaRing)), never as a
//! security primitive.

pub mod computations;
pub mod core;
mod digest;

pub use self::core::{Sha1, sha1, sha1_reader, sha1_str};
pub use self::digest::Digest;

/// Size of one message block in bytes (512 bits).
pub const BLOCK_BYTES: usize = 64;

/// Size of the final digest in bytes (160 bits).
pub const DIGEST_BYTES: usize = 20;

/// Number of 32-bit words in the chaining value.
pub const DIGEST_WORDS: usize = 5;

/// Initial chaining value, one constant per slot.
pub const H160_INIT: [u32; DIGEST_WORDS] =
    [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476, 0xc3d2_e1f0];

/// Additive round constants, one per 20-round pass.
pub const K160: [u32; 4] = [0x5a82_7999, 0x6ed9_eba1, 0x8f1b_bcdc, 0xca62_c1d6];
