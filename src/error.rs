//! Error type shared by every fallible `U256` operation.

use thiserror::Error;

/// Errors produced when parsing, converting, or doing checked arithmetic
/// on a `U256`.
///
/// All failures are deterministic functions of the input and are reported
/// as values; no operation in this crate panics on user input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A character outside `0-9a-fA-F` was found while parsing.
    ///
    /// `position` is the character index of the first offending character.
    #[error("invalid hexadecimal digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },

    /// The value does not fit in 256 bits (or in the narrower target type).
    #[error("value does not fit in the target width")]
    Overflow,
}
