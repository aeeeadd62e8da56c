pub use super::K160;

/// Number of words in the expanded message schedule.
pub const SCHEDULE_WORDS: usize = 80;

#[inline(always)]
pub fn ch(x: u32, y: u32, z: u32) -> u32 {
    // (x & y) ^ (!x & z), one operation shorter
    z ^ (x & (y ^ z))
}

#[inline(always)]
pub fn parity(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
pub fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (z & (x | y))
}

/// Expands the 16 block words into the 80-word message schedule.
///
/// Words 16..32 use the defining recurrence
/// `W[t] = ROTL1(W[t-3] ^ W[t-8] ^ W[t-14] ^ W[t-16])`. From word 32 on the
/// equivalent form `W[t] = ROTL2(W[t-6] ^ W[t-16] ^ W[t-28] ^ W[t-32])` is
/// used, which has no dependency closer than six words back.
pub fn expand(block: &[u32; 16]) -> [u32; SCHEDULE_WORDS] {
    let mut w = [0u32; SCHEDULE_WORDS];
    w[..16].copy_from_slice(block);

    for t in 16..32 {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }
    for t in 32..SCHEDULE_WORDS {
        w[t] = (w[t - 6] ^ w[t - 16] ^ w[t - 28] ^ w[t - 32]).rotate_left(2);
    }

    w
}

#[cfg(not(feature = "speed"))]
pub fn all_rounds(state: &mut [u32; 5], block: &[u32; 16]) {
    let mut w = expand(block);

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    // Four passes instead of one loop with a per-round branch on `t`.
    macro_rules! pass {
        ($f:ident, $k:expr, $range:expr) => {
            for t in $range {
                let tmp = a
                    .rotate_left(5)
                    .wrapping_add($f(b, c, d))
                    .wrapping_add(e)
                    .wrapping_add($k)
                    .wrapping_add(w[t]);
                e = d;
                d = c;
                c = b.rotate_left(30);
                b = a;
                a = tmp;
            }
        };
    }

    pass!(ch, K160[0], 0..20);
    pass!(parity, K160[1], 20..40);
    pass!(maj, K160[2], 40..60);
    pass!(parity, K160[3], 60..80);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);

    w.fill(0);
}

#[cfg(feature = "speed")]
pub fn all_rounds(state: &mut [u32; 5], block: &[u32; 16]) {
    let mut w = *block;

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    // The schedule is kept as a rolling window of 16 words.
    macro_rules! R {
        ($i:expr, $f:ident, $k:expr) => {{
            if $i >= 16 {
                // t-3, t-8, t-14 and t-16 modulo 16
                let w3 = w[($i + 13) & 15];
                let w8 = w[($i + 8) & 15];
                let w14 = w[($i + 2) & 15];
                let w16 = w[$i & 15];

                w[$i & 15] = (w3 ^ w8 ^ w14 ^ w16).rotate_left(1);
            }

            let tmp = a
                .rotate_left(5)
                .wrapping_add($f(b, c, d))
                .wrapping_add(e)
                .wrapping_add($k)
                .wrapping_add(w[$i & 15]);

            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = tmp;
        }};
    }

    R!(0, ch, K160[0]);
    R!(1, ch, K160[0]);
    R!(2, ch, K160[0]);
    R!(3, ch, K160[0]);
    R!(4, ch, K160[0]);
    R!(5, ch, K160[0]);
    R!(6, ch, K160[0]);
    R!(7, ch, K160[0]);
    R!(8, ch, K160[0]);
    R!(9, ch, K160[0]);
    R!(10, ch, K160[0]);
    R!(11, ch, K160[0]);
    R!(12, ch, K160[0]);
    R!(13, ch, K160[0]);
    R!(14, ch, K160[0]);
    R!(15, ch, K160[0]);
    R!(16, ch, K160[0]);
    R!(17, ch, K160[0]);
    R!(18, ch, K160[0]);
    R!(19, ch, K160[0]);

    R!(20, parity, K160[1]);
    R!(21, parity, K160[1]);
    R!(22, parity, K160[1]);
    R!(23, parity, K160[1]);
    R!(24, parity, K160[1]);
    R!(25, parity, K160[1]);
    R!(26, parity, K160[1]);
    R!(27, parity, K160[1]);
    R!(28, parity, K160[1]);
    R!(29, parity, K160[1]);
    R!(30, parity, K160[1]);
    R!(31, parity, K160[1]);
    R!(32, parity, K160[1]);
    R!(33, parity, K160[1]);
    R!(34, parity, K160[1]);
    R!(35, parity, K160[1]);
    R!(36, parity, K160[1]);
    R!(37, parity, K160[1]);
    R!(38, parity, K160[1]);
    R!(39, parity, K160[1]);

    R!(40, maj, K160[2]);
    R!(41, maj, K160[2]);
    R!(42, maj, K160[2]);
    R!(43, maj, K160[2]);
    R!(44, maj, K160[2]);
    R!(45, maj, K160[2]);
    R!(46, maj, K160[2]);
    R!(47, maj, K160[2]);
    R!(48, maj, K160[2]);
    R!(49, maj, K160[2]);
    R!(50, maj, K160[2]);
    R!(51, maj, K160[2]);
    R!(52, maj, K160[2]);
    R!(53, maj, K160[2]);
    R!(54, maj, K160[2]);
    R!(55, maj, K160[2]);
    R!(56, maj, K160[2]);
    R!(57, maj, K160[2]);
    R!(58, maj, K160[2]);
    R!(59, maj, K160[2]);

    R!(60, parity, K160[3]);
    R!(61, parity, K160[3]);
    R!(62, parity, K160[3]);
    R!(63, parity, K160[3]);
    R!(64, parity, K160[3]);
    R!(65, parity, K160[3]);
    R!(66, parity, K160[3]);
    R!(67, parity, K160[3]);
    R!(68, parity, K160[3]);
    R!(69, parity, K160[3]);
    R!(70, parity, K160[3]);
    R!(71, parity, K160[3]);
    R!(72, parity, K160[3]);
    R!(73, parity, K160[3]);
    R!(74, parity, K160[3]);
    R!(75, parity, K160[3]);
    R!(76, parity, K160[3]);
    R!(77, parity, K160[3]);
    R!(78, parity, K160[3]);
    R!(79, parity, K160[3]);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanded_schedule_matches_defining_recurrence() {
        let mut block = [0u32; 16];
        for (i, word) in block.iter_mut().enumerate() {
            *word = (i as u32).wrapping_mul(0x9e37_79b9) ^ 0x0123_4567;
        }

        let fast = expand(&block);

        let mut slow = [0u32; SCHEDULE_WORDS];
        slow[..16].copy_from_slice(&block);
        for t in 16..SCHEDULE_WORDS {
            slow[t] = (slow[t - 3] ^ slow[t - 8] ^ slow[t - 14] ^ slow[t - 16]).rotate_left(1);
        }

        assert_eq!(fast, slow);
    }

    #[test]
    fn round_functions_match_textbook_forms() {
        let samples = [0u32, 0xffff_ffff, 0xdead_beef, 0x0f0f_0f0f, 0x1234_5678];

        for &x in &samples {
            for &y in &samples {
                for &z in &samples {
                    assert_eq!(ch(x, y, z), (x & y) ^ (!x & z));
                    assert_eq!(maj(x, y, z), (x & y) ^ (x & z) ^ (y & z));
                    assert_eq!(parity(x, y, z), x ^ y ^ z);
                }
            }
        }
    }
}
