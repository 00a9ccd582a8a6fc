//! Integer conversion utilities
//!
//! This module groups explicit conversion implementations between the
//! fixed-size `U256` primitive and native integer types.
//!
//! Each submodule is responsible for conversions to and from a specific
//! integer width, following these principles:
//! - limb arrays are least significant limb first, like the internal layout
//! - byte arrays state their endianness in the method name
//! - widening conversions are infallible
//! - narrowing conversions fail with `ErrorKind::Overflow` rather than
//!   truncate

mod u128;
mod u16;
mod u32;
mod u64;
mod u8;

use crate::primitives::U256;

/// Returns `true` when every limb at or above `low_limbs` is zero, i.e. the
/// value fits in the lowest `32 * low_limbs` bits.
pub(crate) fn fits_in_limbs(value: &U256, low_limbs: usize) -> bool {
    value.0[low_limbs..].iter().all(|&limb| limb == 0)
}
