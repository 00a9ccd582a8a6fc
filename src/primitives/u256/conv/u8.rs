//! Conversions between `U256` and byte representations
//!
//! These conversions are the boundary between the little-limb-endian
//! internal layout and the byte orders used for hashing, serialization,
//! and interoperability with low-level APIs.

use crate::error::ErrorKind;
use crate::primitives::U256;

use super::fits_in_limbs;

impl U256 {
    /// Interprets 32 bytes as a big-endian 256-bit value.
    ///
    /// The bytes are split into eight 4-byte chunks; the first chunk becomes
    /// limb 7 and the last becomes limb 0.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut out = [0u32; 8];

        for (o, chunk) in out.iter_mut().rev().zip(bytes.chunks_exact(4)) {
            *o = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        U256(out)
    }

    /// Returns the value as 32 big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];

        for (chunk, limb) in out.chunks_exact_mut(4).zip(self.0.iter().rev()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }

        out
    }

    /// Interprets 32 bytes as a little-endian 256-bit value.
    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        let mut out = [0u32; 8];

        for (o, chunk) in out.iter_mut().zip(bytes.chunks_exact(4)) {
            *o = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        U256(out)
    }

    /// Returns the value as 32 little-endian bytes.
    pub fn to_le_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];

        for (chunk, limb) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }

        out
    }
}

/// Attempts to convert a `U256` into a `u8`.
///
/// The conversion succeeds only if the upper 248 bits of the value are zero.
impl TryFrom<U256> for u8 {
    type Error = ErrorKind;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if !fits_in_limbs(&value, 1) || value.0[0] > u8::MAX as u32 {
            return Err(ErrorKind::Overflow);
        }

        Ok(value.0[0] as u8)
    }
}

/// Converts a `u8` into a `U256`.
impl From<u8> for U256 {
    fn from(value: u8) -> Self {
        U256::from(value as u32)
    }
}
