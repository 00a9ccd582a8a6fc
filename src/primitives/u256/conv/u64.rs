//! Conversions between `U256` and 64-bit integers

use crate::error::ErrorKind;
use crate::primitives::U256;

use super::fits_in_limbs;

/// Attempts to convert a `U256` into a `u64`.
///
/// The conversion succeeds only if the upper 192 bits of the value are zero.
impl TryFrom<U256> for u64 {
    type Error = ErrorKind;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if !fits_in_limbs(&value, 2) {
            return Err(ErrorKind::Overflow);
        }

        Ok(((value.0[1] as u64) << 32) | value.0[0] as u64)
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        let mut out = [0u32; 8];
        out[0] = value as u32;
        out[1] = (value >> 32) as u32;
        U256(out)
    }
}
