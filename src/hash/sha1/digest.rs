use std::fmt::{Display, Formatter, Result};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::{DIGEST_BYTES, DIGEST_WORDS};

/// A finished 160-bit SHA-1 digest.
///
/// Digests are plain values: they are produced by [`Sha1::hash`] and never
/// change afterwards. Equality and hashing are byte-wise, so a digest can be
/// used directly as a content signature key.
///
/// [`Sha1::hash`]: super::Sha1::hash
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(pub(crate) [u8; DIGEST_BYTES]);

impl Digest {
    /// Returns the raw digest bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.0
    }

    /// Consumes the digest and returns its bytes.
    pub const fn to_bytes(self) -> [u8; DIGEST_BYTES] {
        self.0
    }

    /// Uppercase hexadecimal with a `0x` prefix, e.g. `0xDA39A3EE...`.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode_upper(self.0))
    }

    /// Standard, padded base64.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }
}

impl From<[u8; DIGEST_BYTES]> for Digest {
    fn from(bytes: [u8; DIGEST_BYTES]) -> Self {
        Digest(bytes)
    }
}

impl From<[u32; DIGEST_WORDS]> for Digest {
    /// Serializes a chaining value, each word big-endian.
    fn from(words: [u32; DIGEST_WORDS]) -> Self {
        let mut out = [0u8; DIGEST_BYTES];
        out.chunks_exact_mut(4)
            .zip(&words)
            .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_be_bytes()));

        Digest(out)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("0x")?;

        for byte in self.0.iter() {
            write!(f, "{:02X}", byte)?;
        }

        Ok(())
    }
}
