//! Randomness source capabilities
//!
//! Two flat capabilities are defined here:
//! - [`Source`] produces uniformly distributed 64-bit words
//! - [`BitSource`] additionally packs an exact number of bits into bytes
//!
//! Any `rand_core` generator can be turned into a [`BitSource`] with
//! [`extend`].

use rand_core::RngCore;

use super::bits;

/// A producer of uniformly distributed 64-bit words.
pub trait Source {
    /// Returns the next word.
    fn next_u64(&mut self) -> u64;
}

/// A [`Source`] that can also hand out an exact number of bits.
pub trait BitSource: Source {
    /// Returns `bits` bits packed big-endian into `ceil(bits / 8)` bytes.
    ///
    /// See [`bits::bytes`] for the exact layout.
    fn next_bits(&mut self, bits: usize) -> Vec<u8> {
        bits::bytes(self, bits)
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

impl<S: BitSource + ?Sized> BitSource for Box<S> {}

/// A `rand_core` generator exposed as a [`BitSource`].
#[derive(Clone, Debug)]
pub struct Extended<R>(R);

impl<R> Extended<R> {
    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: RngCore> Source for Extended<R> {
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }
}

impl<R: RngCore> BitSource for Extended<R> {}

/// Wraps any `rand_core` generator so it can feed the bit extraction and
/// distribution layers.
pub fn extend<R: RngCore>(rng: R) -> Extended<R> {
    Extended(rng)
}
