//! Normalized RGB colors and hex notation.

use crate::error::{BrandError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// An opaque RGB color. Two colors are equal only when all three channels match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value; the top byte is ignored.
    #[must_use]
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    #[must_use]
    pub const fn to_u24(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parses `#RGB`, `#RRGGBB`, `RGB` or `RRGGBB` (case-insensitive).
    ///
    /// # Errors
    /// Returns `InvalidHex` for anything else.
    pub fn from_hex(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let Some(caps) = HEX_RE.captures(trimmed) else {
            return Err(BrandError::InvalidHex(input.to_string()));
        };
        let digits = &caps[1];
        let expanded: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };
        u32::from_str_radix(&expanded, 16)
            .map(Self::from_u24)
            .map_err(|_| BrandError::InvalidHex(input.to_string()))
    }

    /// Canonical `#RRGGBB` form, uppercase.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// True when every channel is strictly above `threshold`.
    #[must_use]
    pub fn is_near_white(self, threshold: u8) -> bool {
        self.r > threshold && self.g > threshold && self.b > threshold
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = BrandError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = BrandError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() -> Result<()> {
        assert_eq!(Color::from_hex("#0066CC")?, Color::rgb(0x00, 0x66, 0xCC));
        assert_eq!(Color::from_hex("0066cc")?, Color::rgb(0x00, 0x66, 0xCC));
        Ok(())
    }

    #[test]
    fn expands_three_digit_hex() -> Result<()> {
        assert_eq!(Color::from_hex("#abc")?.to_hex(), "#AABBCC");
        Ok(())
    }

    #[test]
    fn rejects_bad_lengths_and_digits() {
        for bad in ["", "#", "#12", "#1234", "#12345", "#1234567", "#GGGGGG", "red"] {
            assert!(
                matches!(Color::from_hex(bad), Err(BrandError::InvalidHex(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn packs_into_24_bits() {
        let c = Color::rgb(0x12, 0x34, 0x56);
        assert_eq!(c.to_u24(), 0x12_3456);
        assert_eq!(Color::from_u24(0xFF12_3456), c);
    }

    #[test]
    fn near_white_is_strict() {
        assert!(Color::rgb(251, 251, 251).is_near_white(250));
        assert!(!Color::rgb(250, 255, 255).is_near_white(250));
    }

    #[test]
    fn serializes_as_hex_string() -> std::result::Result<(), serde_json::Error> {
        let json = serde_json::to_string(&Color::rgb(0, 0x66, 0xCC))?;
        assert_eq!(json, "\"#0066CC\"");
        let back: Color = serde_json::from_str("\"#f0f\"")?;
        assert_eq!(back, Color::rgb(0xFF, 0, 0xFF));
        Ok(())
    }
}
