use std::sync::Arc;

use parking_lot::Mutex;

use crate::rng::{BitSource, Source};

/// A generator shared between several production loops.
///
/// Every draw takes the lock for its whole duration, so values drawn by
/// different loops never interleave within one another. Clones refer to
/// the same generator.
#[derive(Debug)]
pub struct SharedSource<S>(Arc<Mutex<S>>);

impl<S> Clone for SharedSource<S> {
    fn clone(&self) -> Self {
        SharedSource(Arc::clone(&self.0))
    }
}

impl<S: BitSource> SharedSource<S> {
    pub fn new(source: S) -> Self {
        SharedSource(Arc::new(Mutex::new(source)))
    }

    /// Draws one 64-bit word.
    pub fn next_u64(&self) -> u64 {
        self.0.lock().next_u64()
    }

    /// Draws exactly `bits` bits, see [`BitSource::next_bits`].
    pub fn next_bits(&self, bits: usize) -> Vec<u8> {
        self.0.lock().next_bits(bits)
    }

    /// Runs `f` with exclusive access to the generator.
    pub fn with<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.0.lock())
    }
}
