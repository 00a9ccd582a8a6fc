//! Conversions between `U256` and 128-bit integer representations
//!
//! A `u128` spans the four least significant limbs.

use crate::error::ErrorKind;
use crate::primitives::U256;

use super::fits_in_limbs;

/// Attempts to convert a `U256` into a `u128`.
///
/// The conversion succeeds only if the upper 128 bits of the value are zero.
impl TryFrom<U256> for u128 {
    type Error = ErrorKind;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if !fits_in_limbs(&value, 4) {
            return Err(ErrorKind::Overflow);
        }

        Ok(value.0[..4]
            .iter()
            .rev()
            .fold(0u128, |acc, &limb| (acc << 32) | limb as u128))
    }
}

/// Converts a `u128` into a `U256`.
///
/// The value fills limbs 0 to 3; the upper 128 bits are zero.
impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        let mut out = [0u32; 8];

        for (i, o) in out.iter_mut().take(4).enumerate() {
            *o = (value >> (32 * i)) as u32;
        }

        U256(out)
    }
}
