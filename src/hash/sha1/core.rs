//! SHA-1 streaming engine
//!
//! This module implements the incremental SHA-1 engine: block buffering,
//! the per-block compression step and the final padding with the 64-bit
//! message length, as defined in FIPS 180-4.
//!
//! It provides:
//! - [`Sha1`], an engine that accepts input in arbitrary pieces
//! - one-shot helpers for byte slices, strings and readers
//!
//! An engine resets itself when it produces a digest, so a single instance
//! can hash any number of messages without reallocating its buffers.

use std::io::{self, Read, Write};

use super::computations::all_rounds;
use super::{BLOCK_BYTES, Digest, H160_INIT};
use crate::hash::Hasher;

/// Mask selecting the position inside the current block.
const BLOCK_MASK: u64 = BLOCK_BYTES as u64 - 1;

/// Incremental SHA-1 engine.
///
/// Input bytes are packed big-endian into a 16-word block. Every time the
/// block fills up it is compressed into the chaining value and zeroed, so
/// between calls the block holds 0 to 63 pending bytes.
#[derive(Clone, Debug)]
pub struct Sha1 {
    /// Pending input, packed as big-endian words.
    block: [u32; 16],

    /// Total number of message bytes written so far.
    length: u64,

    /// Running hash state.
    chain_value: [u32; 5],
}

impl Sha1 {
    /// Creates an engine in its initial state.
    pub const fn new() -> Self {
        Self {
            block: [0u32; 16],
            length: 0,
            chain_value: H160_INIT,
        }
    }

    /// Creates an engine whose pending message is the bytes of `digest`.
    ///
    /// Calling [`hash`](Self::hash) on it right away yields `SHA1(digest)`.
    pub fn from_digest(digest: &Digest) -> Self {
        let mut hasher = Self::new();
        hasher.update(digest.as_bytes());

        hasher
    }

    /// Number of message bytes written since the last reset.
    pub const fn len(&self) -> u64 {
        self.length
    }

    /// Returns `true` if nothing was written since the last reset.
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Appends `message` to the data being hashed.
    ///
    /// Zero or more complete blocks are compressed along the way; the tail
    /// that does not fill a block stays buffered for the next call.
    pub fn update(&mut self, message: &[u8]) {
        let mut rest = message;

        while !rest.is_empty() {
            let offset = (self.length & BLOCK_MASK) as usize;

            if offset == 0 && rest.len() >= BLOCK_BYTES {
                // Aligned full block, load the words directly.
                let (chunk, tail) = rest.split_at(BLOCK_BYTES);
                for (slot, word) in self.block.iter_mut().zip(chunk.chunks_exact(4)) {
                    *slot = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
                }
                self.length += BLOCK_BYTES as u64;
                rest = tail;
            } else {
                let take = (BLOCK_BYTES - offset).min(rest.len());
                let (chunk, tail) = rest.split_at(take);
                self.copy_bytes(chunk);
                rest = tail;
            }

            if self.length & BLOCK_MASK == 0 {
                self.mix_block();
            }
        }
    }

    /// Copies bytes into the current block, never past its end.
    fn copy_bytes(&mut self, bytes: &[u8]) {
        let offset = (self.length & BLOCK_MASK) as usize;
        debug_assert!(offset + bytes.len() <= BLOCK_BYTES);

        for (i, &byte) in bytes.iter().enumerate() {
            put_byte(&mut self.block, offset + i, byte);
        }
        self.length += bytes.len() as u64;
    }

    /// Compresses the current block into the chaining value and clears it.
    ///
    /// # Panics
    /// Panics if the message length is not at a block boundary. That means
    /// the engine's own bookkeeping is broken and any digest produced from
    /// here on would be wrong.
    fn mix_block(&mut self) {
        assert!(
            self.length & BLOCK_MASK == 0,
            "sha1: mixing a partial block at message offset {}",
            self.length
        );

        all_rounds(&mut self.chain_value, &self.block);

        // With the block zeroed, padding bytes are implicit.
        self.block.fill(0);
    }

    /// Finalizes the message and returns its digest.
    ///
    /// Appends the `1` bit, zero padding and the 64-bit big-endian bit
    /// length, compresses the final block(s) and then resets the engine.
    pub fn hash(&mut self) -> Digest {
        let length = self.length;
        let offset = (length & BLOCK_MASK) as usize;

        put_byte(&mut self.block, offset, 0x80);

        if offset >= BLOCK_BYTES - 8 {
            // No room left for the length field, it goes in an extra block.
            self.length += (BLOCK_BYTES - offset) as u64;
            self.mix_block();
        }

        // Bit length = byte length << 3, split over the last two words.
        self.block[14] = (length >> 29) as u32;
        self.block[15] = (length as u32) << 3;
        self.length = (self.length | BLOCK_MASK) + 1;
        self.mix_block();

        let digest = Digest::from(self.chain_value);
        self.reset();

        digest
    }

    /// Restores the initial chaining value and discards pending input.
    ///
    /// [`hash`](Self::hash) already does this; call it directly only to
    /// abandon a partially written message.
    pub fn reset(&mut self) {
        self.block.fill(0);
        self.length = 0;
        self.chain_value = H160_INIT;
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Sha1 {
    fn update(&mut self, bytes: &[u8]) {
        Sha1::update(self, bytes)
    }

    fn hash(&mut self) -> Digest {
        Sha1::hash(self)
    }

    fn reset(&mut self) {
        Sha1::reset(self)
    }
}

impl Write for Sha1 {
    /// Accepts the whole buffer; writing to memory cannot fail.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Stores `byte` at byte position `pos` of a zero-initialized word block.
#[inline(always)]
fn put_byte(block: &mut [u32; 16], pos: usize, byte: u8) {
    let shift = 24 - 8 * (pos & 3);
    block[pos >> 2] |= (byte as u32) << shift;
}

/// Computes the SHA-1 digest of `input`.
pub fn sha1(input: &[u8]) -> Digest {
    let mut hasher = Sha1::new();
    hasher.update(input);

    hasher.hash()
}

/// Computes the SHA-1 digest of the UTF-8 bytes of `input`.
pub fn sha1_str(input: &str) -> Digest {
    sha1(input.as_bytes())
}

/// Computes the SHA-1 digest of everything `reader` yields.
///
/// # Errors
/// Returns the first I/O error reported by `reader`.
pub fn sha1_reader<R: Read>(mut reader: R) -> io::Result<Digest> {
    let mut hasher = Sha1::new();
    io::copy(&mut reader, &mut hasher)?;

    Ok(hasher.hash())
}
