//! 256-bit unsigned integer primitive
//!
//! This module defines a fixed-size 256-bit unsigned integer type (`U256`)
//! built from eight 32-bit limbs.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Its primary use cases include:
//! - hash outputs and identifiers
//! - keys and scalars before any field reduction
//! - exact 256-bit sums and products that must detect wrap-around
//!
//! The internal representation is **little-limb-endian**: limb 0 holds the
//! least significant 32 bits, limb 7 the most significant. Textual and byte
//! conversions translate to and from big-endian at the boundary.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result};

/// Fixed-size 256-bit unsigned integer.
///
/// The value is `Σ limb[i] · 2^(32·i)` for `i` in `0..8`.
///
/// Instances are immutable values: every arithmetic operation returns a new
/// `U256`. The `*Assign` operator impls are the only in-place operations and
/// behave exactly like their wrapping counterparts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct U256(pub(crate) [u32; 8]);

impl U256 {
    /// Number of 32-bit limbs.
    pub const LIMBS: usize = 8;

    /// Width of the integer in bits.
    pub const BITS: u32 = 256;

    /// The value zero.
    pub const ZERO: Self = Self([0u32; 8]);

    /// The value one.
    pub const ONE: Self = Self::from_limbs([1, 0, 0, 0, 0, 0, 0, 0]);

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([u32::MAX; 8]);

    /// Builds a value from its limbs, least significant limb first.
    pub const fn from_limbs(limbs: [u32; 8]) -> Self {
        U256(limbs)
    }

    /// Returns a copy of the limbs, least significant limb first.
    pub const fn limbs(&self) -> [u32; 8] {
        self.0
    }

    /// Returns the 32-bit limb at `index` (0 is least significant), or
    /// `None` if `index >= 8`.
    pub fn limb(&self, index: usize) -> Option<u32> {
        self.0.get(index).copied()
    }

    /// Returns whether bit `index` is set. Bit 0 is the least significant.
    ///
    /// Indices outside `0..256` are reported as unset.
    pub fn bit(&self, index: u32) -> bool {
        if index >= Self::BITS {
            return false;
        }

        let limb = self.0[(index / 32) as usize];

        (limb >> (index % 32)) & 1 == 1
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// This method scans the integer from the most significant limb and
    /// returns the number of zero bits before the first one bit is encountered.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=256`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &limb in self.0.iter().rev() {
            if limb == 0 {
                count += 32;
            } else {
                count += limb.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Counts the number of trailing zero bits, `256` for zero.
    pub fn trailing_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &limb in self.0.iter() {
            if limb == 0 {
                count += 32;
            } else {
                count += limb.trailing_zeros();
                return count;
            }
        }

        count
    }

    /// Number of bits needed to represent the value (`0` for zero).
    pub fn bits(&self) -> u32 {
        Self::BITS - self.leading_zeros()
    }
}

impl Ord for U256 {
    /// Compares limb by limb, starting from the most significant.
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for U256 {
    /// Formats the value as its canonical 64-digit lowercase hexadecimal
    /// string, identical to [`U256::to_hex`].
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.to_hex())
    }
}
