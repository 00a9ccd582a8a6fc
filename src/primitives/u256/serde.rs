//! `serde` support for `U256`, enabled by the `serde` feature.
//!
//! Values serialize as their canonical 64-digit hexadecimal string and
//! deserialize from any string [`U256::from_hex`] accepts.

use crate::primitives::U256;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for U256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for U256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;

        U256::from_hex(&text).map_err(serde::de::Error::custom)
    }
}
