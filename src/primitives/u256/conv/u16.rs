//! Conversions between `U256` and 16-bit integers

use crate::error::ErrorKind;
use crate::primitives::U256;

use super::fits_in_limbs;

/// Attempts to convert a `U256` into a `u16`.
///
/// The conversion succeeds only if the upper 240 bits of the value are zero.
impl TryFrom<U256> for u16 {
    type Error = ErrorKind;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if !fits_in_limbs(&value, 1) || value.0[0] > u16::MAX as u32 {
            return Err(ErrorKind::Overflow);
        }

        Ok(value.0[0] as u16)
    }
}

impl From<u16> for U256 {
    fn from(value: u16) -> Self {
        U256::from(value as u32)
    }
}
