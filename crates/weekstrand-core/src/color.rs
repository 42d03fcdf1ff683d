//! Strongly typed color keys.
//!
//! Every strand is keyed by the ARGB value of the color it is drawn with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// ARGB color used as a strand key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorKey(pub u32);

impl ColorKey {
    /// Opaque black, the default conflict marker.
    pub const BLACK: ColorKey = ColorKey(0xFF00_0000);

    /// Build an opaque color from its RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorKey(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn argb(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for ColorKey {
    type Err = ValidationError;

    /// Accepts `#RRGGBB` (made opaque), `#AARRGGBB`, `0x`-prefixed hex and
    /// plain decimal (including the negative values signed ARGB ints produce).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let invalid = || ValidationError::InvalidColor(s.to_string());

        if let Some(hex) = raw.strip_prefix('#') {
            let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
            return match hex.len() {
                6 => Ok(ColorKey(0xFF00_0000 | value)),
                8 => Ok(ColorKey(value)),
                _ => Err(invalid()),
            };
        }
        if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
            return u32::from_str_radix(hex, 16).map(ColorKey).map_err(|_| invalid());
        }
        if let Ok(value) = raw.parse::<u32>() {
            return Ok(ColorKey(value));
        }
        raw.parse::<i32>()
            .map(|signed| ColorKey(signed as u32))
            .map_err(|_| invalid())
    }
}

impl TryFrom<String> for ColorKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ColorKey> for String {
    fn from(color: ColorKey) -> Self {
        color.to_string()
    }
}

impl From<u32> for ColorKey {
    fn from(value: u32) -> Self {
        ColorKey(value)
    }
}
