//! Digest-cycling pseudorandom number generator
//!
//! This module implements [`ShaRing`], a deterministic generator whose
//! keystream is a chain of SHA-1 digests:
//!
//! ```text
//! D1 = SHA1(seed)
//! Dn+1 = SHA1(Dn)
//! keystream = D1 || D2 || D3 || ...
//! ```
//!
//! Values are cut from the keystream positionally. A 64-bit word is the
//! next 8 bytes, read big-endian, so two words fit in a digest with 4 bytes
//! left over; the following word takes those 4 bytes plus the first 4 of
//! the next digest. Five words consume exactly two digests. No byte is
//! handed out twice and none is skipped.
//!
//! The sequence depends on the seed alone. It is **not** a cryptographically
//! secure generator: it is meant for simulations and tests that need
//! repeatable randomness.

use log::trace;
use rand_core::RngCore;

use super::{BitSource, Source, bits};
use crate::hash::sha1::DIGEST_BYTES;
use crate::hash::{Digest, Hasher, Sha1};

/// Deterministic generator cycling over SHA-1 digests.
///
/// The first digest is computed lazily, on the first draw.
#[derive(Clone, Debug)]
pub struct ShaRing<H: Hasher = Sha1> {
    /// Engine holding the input of the next digest.
    hasher: H,

    /// Digest currently being consumed.
    digest: Digest,

    /// Bytes of `digest` already handed out, `0..=DIGEST_BYTES`.
    cursor: usize,
}

impl ShaRing<Sha1> {
    /// Creates a generator seeded with raw bytes.
    pub fn from_bytes(seed: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(seed);

        Self::with_hasher(hasher)
    }

    /// Creates a generator seeded with a single 64-bit value.
    ///
    /// The seed is hashed as its 8 big-endian bytes.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_bytes(&seed.to_be_bytes())
    }

    /// Creates a generator from several seed components.
    ///
    /// Components are concatenated as 8 big-endian bytes each, so
    /// `from_seeds(&[x])` is the same generator as `from_seed(x)`.
    pub fn from_seeds(seeds: &[u64]) -> Self {
        let bytes: Vec<u8> = seeds.iter().flat_map(|seed| seed.to_be_bytes()).collect();

        Self::from_bytes(&bytes)
    }

    /// Creates a generator whose first digest is `SHA1(digest)`.
    ///
    /// Seeding with the last digest of another generator continues its
    /// keystream from the following digest.
    pub fn from_digest(digest: &Digest) -> Self {
        Self::with_hasher(Sha1::from_digest(digest))
    }
}

impl<H: Hasher> ShaRing<H> {
    /// Wraps an engine that already holds the seed as pending input.
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            hasher,
            digest: Digest::default(),
            cursor: DIGEST_BYTES,
        }
    }

    /// Returns the next 64-bit word of the keystream.
    pub fn next_u64(&mut self) -> u64 {
        let mut word = [0u8; 8];
        self.fill(&mut word);

        u64::from_be_bytes(word)
    }

    /// Returns exactly `bits` bits, packed big-endian.
    ///
    /// Whole 64-bit words are drawn, so unused low bits of the last word
    /// are discarded.
    pub fn next_bits(&mut self, bits: usize) -> Vec<u8> {
        bits::bytes(self, bits)
    }

    /// Copies the next `out.len()` keystream bytes into `out`.
    pub fn fill(&mut self, out: &mut [u8]) {
        let mut filled = 0;

        while filled < out.len() {
            if self.cursor == DIGEST_BYTES {
                self.advance();
            }

            let take = (DIGEST_BYTES - self.cursor).min(out.len() - filled);
            out[filled..filled + take]
                .copy_from_slice(&self.digest.as_bytes()[self.cursor..self.cursor + take]);

            self.cursor += take;
            filled += take;
        }
    }

    /// Replaces the exhausted digest with the next one in the chain.
    ///
    /// Hashing resets the engine, so the new digest is written back into
    /// it right away as the input of the digest after it.
    fn advance(&mut self) {
        let digest = self.hasher.hash();
        self.hasher.update(digest.as_bytes());

        trace!("sha ring advanced to digest {}", digest);

        self.digest = digest;
        self.cursor = 0;
    }
}

impl<H: Hasher> Source for ShaRing<H> {
    fn next_u64(&mut self) -> u64 {
        ShaRing::<H>::next_u64(self)
    }
}

impl<H: Hasher> BitSource for ShaRing<H> {}

impl<H: Hasher> RngCore for ShaRing<H> {
    fn next_u32(&mut self) -> u32 {
        let mut word = [0u8; 4];
        self.fill(&mut word);

        u32::from_be_bytes(word)
    }

    fn next_u64(&mut self) -> u64 {
        ShaRing::<H>::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill(dest);
        Ok(())
    }
}
