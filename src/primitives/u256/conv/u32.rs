//! Conversions between `U256` and 32-bit integer representations
//!
//! A 32-bit word is exactly one limb, so these conversions expose the
//! internal layout directly: limb arrays are ordered least significant
//! limb first.

use crate::error::ErrorKind;
use crate::primitives::U256;

use super::fits_in_limbs;

/// Converts a `U256` into its eight limbs, least significant first.
impl From<U256> for [u32; 8] {
    fn from(value: U256) -> Self {
        value.0
    }
}

/// Converts eight limbs, least significant first, into a `U256`.
impl From<[u32; 8]> for U256 {
    fn from(value: [u32; 8]) -> Self {
        U256(value)
    }
}

/// Attempts to convert a `U256` into a `u32`.
///
/// The conversion succeeds only if the upper 224 bits of the value are zero.
impl TryFrom<U256> for u32 {
    type Error = ErrorKind;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if !fits_in_limbs(&value, 1) {
            return Err(ErrorKind::Overflow);
        }

        Ok(value.0[0])
    }
}

/// Converts a `u32` into a `U256`.
///
/// The value becomes limb 0, with all higher limbs set to zero.
impl From<u32> for U256 {
    fn from(value: u32) -> Self {
        let mut out = [0u32; 8];
        out[0] = value;
        U256(out)
    }
}
