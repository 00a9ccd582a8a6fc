//! Primitive types
//!
//! This module defines the fixed-size integer primitive exported by this
//! crate.
//!
//! Primitives are simple, fixed-size building blocks that provide
//! well-defined semantics and predictable behavior. They are intentionally
//! minimal and do not attempt to replicate full-featured big-integer
//! libraries: there is no unbounded precision, no signed arithmetic, and no
//! modular (field) arithmetic beyond the natural wrap at 2²⁵⁶.
//!
//! Current primitives include:
//! - `U256`: a fixed-size 256-bit unsigned integer built from 32-bit limbs

mod u256;

pub use u256::U256;
