//! Arithmetic and bitwise operations for `U256`
//!
//! Every operation works limb by limb, least significant limb first, and is
//! defined modulo 2²⁵⁶. Each arithmetic operation comes in three flavors:
//! - `overflowing_*` returns the wrapped result and a carry-out/overflow flag
//! - `wrapping_*` returns only the wrapped result
//! - `checked_*` fails with `ErrorKind::Overflow` instead of wrapping
//!
//! The operator traits (`+`, `-`, `*`, `<<`, `>>`) always wrap and never
//! panic, so overflow is reported rather than raised unless the caller asks
//! for a checked operation.

use crate::error::ErrorKind;
use crate::primitives::U256;

use std::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Mul, MulAssign, Not, Shl, Shr, Sub, SubAssign,
};

impl U256 {
    /// Ripple-carry addition.
    ///
    /// The carry is folded into each limb's sum before moving to the next
    /// limb, so chains of consecutive carries propagate correctly. The
    /// returned flag is the final carry-out: `true` when the true sum
    /// exceeds `U256::MAX`.
    pub fn overflowing_add(self, rhs: U256) -> (U256, bool) {
        let mut out = [0u32; 8];
        let mut carry = 0u64;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()) {
            let sum = a as u64 + b as u64 + carry;
            *o = (sum & 0xFFFF_FFFF) as u32;
            carry = sum >> 32;
        }

        (U256(out), carry != 0)
    }

    pub fn wrapping_add(self, rhs: U256) -> U256 {
        self.overflowing_add(rhs).0
    }

    /// Addition that fails with `ErrorKind::Overflow` instead of wrapping.
    pub fn checked_add(self, rhs: U256) -> Result<U256, ErrorKind> {
        match self.overflowing_add(rhs) {
            (sum, false) => Ok(sum),
            (_, true) => Err(ErrorKind::Overflow),
        }
    }

    /// Ripple-borrow subtraction.
    ///
    /// The flag is `true` when `rhs > self`, in which case the result has
    /// wrapped around modulo 2²⁵⁶.
    pub fn overflowing_sub(self, rhs: U256) -> (U256, bool) {
        let mut out = [0u32; 8];
        let mut borrow = 0i64;

        for ((&a, &b), o) in self.0.iter().zip(rhs.0.iter()).zip(out.iter_mut()) {
            let lhs = a as i64;
            let sub = b as i64 + borrow;

            if lhs >= sub {
                *o = (lhs - sub) as u32;
                borrow = 0;
            } else {
                *o = (lhs + (1i64 << 32) - sub) as u32;
                borrow = 1;
            }
        }

        (U256(out), borrow != 0)
    }

    pub fn wrapping_sub(self, rhs: U256) -> U256 {
        self.overflowing_sub(rhs).0
    }

    /// Subtraction that fails with `ErrorKind::Overflow` when `rhs > self`.
    pub fn checked_sub(self, rhs: U256) -> Result<U256, ErrorKind> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Ok(diff),
            (_, true) => Err(ErrorKind::Overflow),
        }
    }

    /// Two's-complement negation: `(!self) + 1`, so that
    /// `x.wrapping_add(x.wrapping_neg()) == U256::ZERO`.
    pub fn wrapping_neg(self) -> U256 {
        (!self).wrapping_add(U256::ONE)
    }

    /// Schoolbook multiplication keeping the low 256 bits.
    ///
    /// The flag is `true` when any bit of the full 512-bit product above
    /// bit 255 is set.
    pub fn overflowing_mul(self, rhs: U256) -> (U256, bool) {
        let mut wide = [0u32; 16];

        for (i, &a) in self.0.iter().enumerate() {
            let mut carry = 0u64;

            for (j, &b) in rhs.0.iter().enumerate() {
                // (2³² − 1)² + 2·(2³² − 1) still fits in 64 bits.
                let t = a as u64 * b as u64 + wide[i + j] as u64 + carry;
                wide[i + j] = t as u32;
                carry = t >> 32;
            }

            wide[i + 8] = carry as u32;
        }

        let mut low = [0u32; 8];
        low.copy_from_slice(&wide[..8]);

        let overflow = wide[8..].iter().any(|&limb| limb != 0);

        (U256(low), overflow)
    }

    pub fn wrapping_mul(self, rhs: U256) -> U256 {
        self.overflowing_mul(rhs).0
    }

    /// Multiplication that fails with `ErrorKind::Overflow` when the product
    /// does not fit in 256 bits.
    pub fn checked_mul(self, rhs: U256) -> Result<U256, ErrorKind> {
        match self.overflowing_mul(rhs) {
            (product, false) => Ok(product),
            (_, true) => Err(ErrorKind::Overflow),
        }
    }

    /// Left shift, or `None` if `shift >= 256`.
    pub fn checked_shl(self, shift: u32) -> Option<U256> {
        if shift >= U256::BITS {
            return None;
        }

        let limb_shift = (shift / 32) as usize;
        let bit_shift = shift % 32;

        let mut out = [0u32; 8];

        for i in limb_shift..8 {
            let src = i - limb_shift;
            out[i] = self.0[src] << bit_shift;

            if bit_shift != 0 && src > 0 {
                out[i] |= self.0[src - 1] >> (32 - bit_shift);
            }
        }

        Some(U256(out))
    }

    /// Logical right shift, or `None` if `shift >= 256`.
    pub fn checked_shr(self, shift: u32) -> Option<U256> {
        if shift >= U256::BITS {
            return None;
        }

        let limb_shift = (shift / 32) as usize;
        let bit_shift = shift % 32;

        let mut out = [0u32; 8];

        for i in 0..(8 - limb_shift) {
            let src = i + limb_shift;
            out[i] = self.0[src] >> bit_shift;

            if bit_shift != 0 && src + 1 < 8 {
                out[i] |= self.0[src + 1] << (32 - bit_shift);
            }
        }

        Some(U256(out))
    }
}

/// Wrapping addition.
impl Add for U256 {
    type Output = U256;

    fn add(self, rhs: U256) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl AddAssign for U256 {
    fn add_assign(&mut self, rhs: U256) {
        *self = self.wrapping_add(rhs);
    }
}

/// Wrapping subtraction.
impl Sub for U256 {
    type Output = U256;

    fn sub(self, rhs: U256) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

impl SubAssign for U256 {
    fn sub_assign(&mut self, rhs: U256) {
        *self = self.wrapping_sub(rhs);
    }
}

/// Wrapping multiplication.
impl Mul for U256 {
    type Output = U256;

    fn mul(self, rhs: U256) -> Self::Output {
        self.wrapping_mul(rhs)
    }
}

impl MulAssign for U256 {
    fn mul_assign(&mut self, rhs: U256) {
        *self = self.wrapping_mul(rhs);
    }
}

/// Logical left shift. Shifts of 256 bits or more yield zero.
impl Shl<u32> for U256 {
    type Output = U256;

    fn shl(self, shift: u32) -> Self::Output {
        self.checked_shl(shift).unwrap_or(U256::ZERO)
    }
}

/// Logical right shift. Shifts of 256 bits or more yield zero.
impl Shr<u32> for U256 {
    type Output = U256;

    fn shr(self, shift: u32) -> Self::Output {
        self.checked_shr(shift).unwrap_or(U256::ZERO)
    }
}

impl BitAnd for U256 {
    type Output = U256;

    fn bitand(self, rhs: U256) -> Self::Output {
        let mut out = [0u32; 8];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l & r);

        U256(out)
    }
}

impl BitOr for U256 {
    type Output = U256;

    fn bitor(self, rhs: U256) -> Self::Output {
        let mut out = [0u32; 8];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l | r);

        U256(out)
    }
}

impl BitXor for U256 {
    type Output = U256;

    fn bitxor(self, rhs: U256) -> Self::Output {
        let mut out = [0u32; 8];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l ^ r);

        U256(out)
    }
}

impl Not for U256 {
    type Output = U256;

    fn not(self) -> Self::Output {
        U256(self.0.map(|limb| !limb))
    }
}
