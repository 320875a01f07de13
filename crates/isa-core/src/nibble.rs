use std::fmt;

use thiserror::Error;

/// A value that fits in one 4-bit code unit (`0x0..=0xF`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Nibble(u8);

/// Rejected conversion of a value wider than four bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value 0x{0:X} does not fit in 4 bits")]
pub struct NibbleOutOfRange(pub u8);

impl Nibble {
    /// Largest representable value.
    pub const MAX: Self = Self(0xF);
    /// Zero.
    pub const ZERO: Self = Self(0x0);

    /// Creates a nibble if `value` is at most `0xF`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 0xF {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Creates a nibble from the low four bits of `value`.
    #[must_use]
    pub const fn truncate(value: u8) -> Self {
        Self(value & 0xF)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Nibble {
    type Error = NibbleOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(NibbleOutOfRange(value))
    }
}

impl From<Nibble> for u8 {
    fn from(nibble: Nibble) -> Self {
        nibble.0
    }
}

impl fmt::Display for Nibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}

impl fmt::UpperHex for Nibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
