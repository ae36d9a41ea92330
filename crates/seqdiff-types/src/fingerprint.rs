use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Width of every fingerprint in bytes.
pub const FINGERPRINT_LEN: usize = 32;

/// Fixed-width digest of an element's canonical encoding.
///
/// Two elements with equal fingerprints are treated as equal by the diff
/// engine. Distinct elements sharing a fingerprint would require a
/// collision in a 256-bit cryptographic digest; that probability is
/// negligible and is assumed away rather than checked.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fingerprint([u8; FINGERPRINT_LEN]);

impl Fingerprint {
    /// Wrap a digest that was already computed.
    pub const fn from_digest(digest: [u8; FINGERPRINT_LEN]) -> Self {
        Self(digest)
    }

    /// Copy a fingerprint out of a digest buffer of exactly
    /// [`FINGERPRINT_LEN`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypeError> {
        let arr: [u8; FINGERPRINT_LEN] =
            bytes.try_into().map_err(|_| TypeError::InvalidLength {
                expected: FINGERPRINT_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.short_hex())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
