//! 256-bit unsigned integer primitive
//!
//! This module defines the `U256` type, a fixed-size 256-bit unsigned
//! integer stored as eight 32-bit limbs.
//!
//! `U256` is designed as a low-level primitive rather than a full
//! big-integer abstraction. It provides hexadecimal parsing and formatting,
//! ripple-carry arithmetic with explicit overflow reporting, and
//! conversions to native integers and byte arrays.
//!
//! The internal representation is little-limb-endian and remains stable
//! across all operations and conversions.

mod conv;
mod core;
mod hex;
mod ops;
#[cfg(feature = "serde")]
mod serde;

/// Fixed-size 256-bit unsigned integer.
///
/// This type is re-exported as the primary 256-bit integer primitive.
pub use self::core::U256;
