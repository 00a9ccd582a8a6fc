//! Fixed-width 256-bit unsigned integers
//!
//! This crate provides `U256`, a 256-bit unsigned integer stored as eight
//! 32-bit limbs, intended as the arithmetic core for primitives that
//! operate on 256-bit values (hash outputs, keys, scalars before reduction).
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large big-integer API.
//!
//! # Module overview
//!
//! - `primitives`
//!   The `U256` value type: construction from and formatting to
//!   hexadecimal text, ripple-carry addition and the other limb-wise
//!   arithmetic, comparisons, and conversions to native integers and byte
//!   arrays.
//!
//! - `error`
//!   `ErrorKind`, returned by every fallible operation. Nothing in this
//!   crate panics on user input.
//!
//! The four free functions at the crate root (`parse_hex`, `to_hex`, `add`,
//! `checked_add`) are the minimal surface that callers such as command-line
//! tools build on; the same operations are also available as methods on
//! `U256`.
//!
//! # Design goals
//!
//! - No heap allocations in arithmetic
//! - Overflow is always reported, never silent and never a panic
//! - Immutable values: every operation returns a new `U256`
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for `U256` as a 64-digit hex string.

mod error;

pub mod primitives;

pub use error::ErrorKind;
pub use primitives::U256;

/// Parses a big-endian hexadecimal numeral into a `U256`.
///
/// See [`U256::from_hex`] for the exact rules.
pub fn parse_hex(text: &str) -> Result<U256, ErrorKind> {
    U256::from_hex(text)
}

/// Formats `value` as 64 lowercase, zero-padded hexadecimal digits.
pub fn to_hex(value: U256) -> String {
    value.to_hex()
}

/// Adds two values modulo 2²⁵⁶, returning the wrapped sum and whether the
/// true sum exceeded `U256::MAX`.
pub fn add(a: U256, b: U256) -> (U256, bool) {
    a.overflowing_add(b)
}

/// Adds two values, failing with `ErrorKind::Overflow` instead of wrapping.
pub fn checked_add(a: U256, b: U256) -> Result<U256, ErrorKind> {
    a.checked_add(b)
}
