//! Bit extraction over a word source.

use super::Source;

/// Draws exactly `bits` bits from `source`, packed big-endian.
///
/// The output has `ceil(bits / 8)` bytes. Words are drawn one at a time,
/// as many as needed, and each contributes its bytes most significant
/// first. When `bits` is not a multiple of 8 the last byte keeps only the
/// low `bits % 8` bits of the byte it was taken from; everything above is
/// zero.
///
/// A request for zero bits returns an empty vector without touching
/// `source`.
pub fn bytes<S: Source + ?Sized>(source: &mut S, bits: usize) -> Vec<u8> {
    // Sized up front, every slot is written exactly once below.
    let mut out = vec![0u8; bits.div_ceil(8)];
    let mut remaining = bits;

    for chunk in out.chunks_mut(8) {
        let word = source.next_u64().to_be_bytes();

        for (slot, byte) in chunk.iter_mut().zip(word) {
            if remaining < 8 {
                *slot = byte & ((1u8 << remaining) - 1);
                remaining = 0;
            } else {
                *slot = byte;
                remaining -= 8;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts draws and returns a fixed word.
    struct Fixed {
        word: u64,
        draws: usize,
    }

    impl Source for Fixed {
        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.word
        }
    }

    #[test]
    fn zero_bits_draws_nothing() {
        let mut source = Fixed { word: u64::MAX, draws: 0 };

        assert!(bytes(&mut source, 0).is_empty());
        assert_eq!(source.draws, 0);
    }

    #[test]
    fn partial_byte_keeps_low_bits() {
        let mut source = Fixed { word: 0xfedc_ba98_7654_3210, draws: 0 };

        assert_eq!(bytes(&mut source, 12), vec![0xfe, 0x0c]);
        assert_eq!(bytes(&mut source, 3), vec![0x06]);
        assert_eq!(source.draws, 2);
    }

    #[test]
    fn words_are_concatenated_in_order() {
        let mut source = Fixed { word: 0x0102_0304_0506_0708, draws: 0 };

        let out = bytes(&mut source, 136);

        assert_eq!(out.len(), 17);
        assert_eq!(&out[..8], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(&out[8..16], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(out[16], 1);
        assert_eq!(source.draws, 3);
    }
}
