//! Hexadecimal text conversions for `U256`
//!
//! Text is always a big-endian numeral: the first digit is the most
//! significant. Parsing accepts `0-9a-fA-F` only, with no prefix, sign, or
//! whitespace. Inputs shorter than 64 digits are zero-padded on the left.
//! Longer inputs are accepted only when the extra digits are leading zeros;
//! any other overlong numeral is rejected with `ErrorKind::Overflow`
//! instead of being truncated.

use crate::error::ErrorKind;
use crate::primitives::U256;

use std::fmt::{Formatter, LowerHex, Result as FmtResult, UpperHex};
use std::str::FromStr;

/// Number of hexadecimal digits in the canonical form.
const HEX_DIGITS: usize = 64;

impl U256 {
    /// Parses a big-endian hexadecimal numeral.
    ///
    /// The numeral is left-padded to 64 digits, split into eight 8-digit
    /// chunks, and the chunks are stored in reverse so that the first chunk
    /// lands in limb 7. An empty string parses as zero.
    ///
    /// # Errors
    ///
    /// - `InvalidDigit` for the first character outside `0-9a-fA-F`. The
    ///   whole input is checked before its length.
    /// - `Overflow` if more than 64 significant digits remain once leading
    ///   zeros are stripped.
    pub fn from_hex(text: &str) -> Result<Self, ErrorKind> {
        if let Some((position, digit)) = text
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(ErrorKind::InvalidDigit { digit, position });
        }

        let significant = text.trim_start_matches('0');

        if significant.len() > HEX_DIGITS {
            return Err(ErrorKind::Overflow);
        }

        let padded = format!("{:0>width$}", significant, width = HEX_DIGITS);

        let mut out = [0u32; 8];

        for (limb, chunk) in out.iter_mut().rev().zip(padded.as_bytes().chunks_exact(8)) {
            *limb = chunk
                .iter()
                .fold(0u32, |acc, &digit| (acc << 4) | nibble(digit));
        }

        Ok(U256(out))
    }

    /// Returns the canonical 64-character, lowercase, zero-padded
    /// hexadecimal form, most significant limb first.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_be_bytes())
    }

    /// Writes the minimal hexadecimal digits (no leading zeros, `"0"` for
    /// zero) into a fresh string, in the requested case.
    fn minimal_hex(&self, upper: bool) -> String {
        let full = if upper {
            hex::encode_upper(self.to_be_bytes())
        } else {
            self.to_hex()
        };

        let trimmed = full.trim_start_matches('0');

        if trimmed.is_empty() {
            "0".to_owned()
        } else {
            trimmed.to_owned()
        }
    }
}

/// Value of one ASCII hex digit. Only called on input that already passed
/// the `is_ascii_hexdigit` check, so anything outside `0-9a-f` is `A-F`.
fn nibble(digit: u8) -> u32 {
    match digit {
        b'0'..=b'9' => (digit - b'0') as u32,
        b'a'..=b'f' => (digit - b'a' + 10) as u32,
        _ => (digit - b'A' + 10) as u32,
    }
}

impl FromStr for U256 {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U256::from_hex(s)
    }
}

/// Minimal lowercase hex. `{:#x}` adds a `0x` prefix and width/fill flags
/// are honored, as for native integers.
impl LowerHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.pad_integral(true, "0x", &self.minimal_hex(false))
    }
}

/// Minimal uppercase hex, see [`LowerHex`].
impl UpperHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.pad_integral(true, "0x", &self.minimal_hex(true))
    }
}
