//! Fill colors for highlights.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An opaque RGB fill color.
///
/// Serialized as a `#rrggbb` hex string so config files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Errors from parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Wrong number of hex digits
    #[error("Expected 6 hex digits in color '{0}'")]
    InvalidLength(String),

    /// A character outside 0-9a-fA-F
    #[error("Invalid hex digit in color '{0}'")]
    InvalidDigit(String),
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(ColorError::InvalidLength(hex.to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::InvalidDigit(hex.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS `rgba()` value with the given opacity (clamped to 0.0-1.0).
    pub fn to_css_rgba(&self, opacity: f32) -> String {
        format!(
            "rgba({}, {}, {}, {:.2})",
            self.r,
            self.g,
            self.b,
            opacity.clamp(0.0, 1.0)
        )
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for ColorSpec {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<ColorSpec> for String {
    fn from(color: ColorSpec) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_with_and_without_hash() {
        let expected = ColorSpec::rgb(0xfe, 0xf0, 0x8a);
        assert_eq!(ColorSpec::from_hex("#fef08a"), Ok(expected));
        assert_eq!(ColorSpec::from_hex("FEF08A"), Ok(expected));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            ColorSpec::from_hex("#fff"),
            Err(ColorError::InvalidLength(_))
        ));
        assert!(matches!(
            ColorSpec::from_hex("#gg0000"),
            Err(ColorError::InvalidDigit(_))
        ));
        // Six bytes but not six ASCII digits
        assert!(ColorSpec::from_hex("#é0000").is_err());
    }

    #[test]
    fn test_hex_output() {
        assert_eq!(ColorSpec::rgb(1, 171, 255).to_hex(), "#01abff");
        assert_eq!(ColorSpec::rgb(1, 171, 255).to_string(), "#01abff");
    }

    #[test]
    fn test_css_rgba() {
        let color = ColorSpec::rgb(254, 240, 138);
        assert_eq!(color.to_css_rgba(0.7), "rgba(254, 240, 138, 0.70)");
        assert_eq!(color.to_css_rgba(3.0), "rgba(254, 240, 138, 1.00)");
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&ColorSpec::rgb(0x1e, 0x3a, 0x8a)).unwrap();
        assert_eq!(json, "\"#1e3a8a\"");

        let parsed: ColorSpec = serde_json::from_str("\"#bbf7d0\"").unwrap();
        assert_eq!(parsed, ColorSpec::rgb(0xbb, 0xf7, 0xd0));

        assert!(serde_json::from_str::<ColorSpec>("\"nope\"").is_err());
    }
}
