use crate::core::parser::{parse_size, truncate_bytes};
use crate::error::SizeError;
use crate::utils::format_size;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A non-negative byte count for use in config structs and CLI arguments.
///
/// Deserializes from a byte count or a size string such as `"4MiB"`;
/// fractional counts truncate like `"1.5"` does. Always serializes as the
/// integer byte count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteSize(i64);

impl ByteSize {
    pub const ZERO: ByteSize = ByteSize(0);

    pub fn as_i64(self) -> i64 {
        self.0
    }

    pub fn as_u64(self) -> u64 {
        self.0 as u64
    }
}

impl FromStr for ByteSize {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_size(s).map(ByteSize)
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_size(self.0))
    }
}

impl From<u32> for ByteSize {
    fn from(bytes: u32) -> Self {
        ByteSize(i64::from(bytes))
    }
}

impl TryFrom<i64> for ByteSize {
    type Error = SizeError;

    fn try_from(bytes: i64) -> Result<Self, Self::Error> {
        if bytes < 0 {
            return Err(SizeError::NegativeSize(bytes.to_string()));
        }
        Ok(ByteSize(bytes))
    }
}

impl TryFrom<u64> for ByteSize {
    type Error = SizeError;

    fn try_from(bytes: u64) -> Result<Self, Self::Error> {
        i64::try_from(bytes)
            .map(ByteSize)
            .map_err(|_| SizeError::Overflow(bytes.to_string()))
    }
}

impl From<ByteSize> for i64 {
    fn from(size: ByteSize) -> Self {
        size.0
    }
}

impl Serialize for ByteSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for ByteSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ByteSizeVisitor)
    }
}

struct ByteSizeVisitor;

impl<'de> Visitor<'de> for ByteSizeVisitor {
    type Value = ByteSize;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a byte count or a size string such as \"4MiB\"")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        ByteSize::try_from(v).map_err(E::custom)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        ByteSize::try_from(v).map_err(E::custom)
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        truncate_bytes(v, &v.to_string())
            .map(ByteSize)
            .map_err(E::custom)
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse().map_err(E::custom)
    }
}
