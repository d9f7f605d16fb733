//! Byte order selector
//!
//! The selector is a closed enum, so an encoder can never be handed an order
//! it does not understand. Orders arriving from config strings or binary tags
//! go through [`FromStr`] / [`TryFrom<u8>`] first and are rejected there.

use std::fmt;
use std::str::FromStr;

use crate::error::ByteOrderError;

/// Order in which the bytes of a multi-byte value are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ByteOrder {
    /// Most significant byte first
    #[cfg_attr(feature = "serde", serde(alias = "big", alias = "be"))]
    BigEndian,
    /// Least significant byte first
    #[cfg_attr(feature = "serde", serde(alias = "little", alias = "le"))]
    LittleEndian,
}

impl ByteOrder {
    /// Byte order of the compilation target
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::LittleEndian;
    /// Byte order of the compilation target
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::BigEndian;

    /// Returns true for little-endian, false for big-endian.
    ///
    /// Every encoder resolves its byte order through this one call.
    #[inline]
    pub const fn is_little_endian(self) -> bool {
        matches!(self, Self::LittleEndian)
    }

    /// True when values can be copied as-is from memory.
    #[inline]
    pub const fn is_native(self) -> bool {
        self.is_little_endian() == Self::NATIVE.is_little_endian()
    }

    /// One-byte tag for binary headers (0 = little-endian, 1 = big-endian)
    #[inline]
    pub const fn tag(self) -> u8 {
        match self {
            Self::LittleEndian => 0,
            Self::BigEndian => 1,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BigEndian => "big-endian",
            Self::LittleEndian => "little-endian",
        })
    }
}

/// Accepts `big`/`be`/`big-endian` and `little`/`le`/`little-endian`, the same
/// spellings as the serde form. Parsing is also ASCII case-insensitive, trims
/// whitespace and accepts `native`, none of which serde does.
impl FromStr for ByteOrder {
    type Err = ByteOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "big" | "be" | "big-endian" => Ok(Self::BigEndian),
            "little" | "le" | "little-endian" => Ok(Self::LittleEndian),
            "native" => Ok(Self::NATIVE),
            _ => Err(ByteOrderError::InvalidName(s.to_string())),
        }
    }
}

impl TryFrom<u8> for ByteOrder {
    type Error = ByteOrderError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::LittleEndian),
            1 => Ok(Self::BigEndian),
            other => Err(ByteOrderError::InvalidTag(other)),
        }
    }
}
