//! Line and highlight colors
//!
//! Colors are plain 24-bit RGB values exchanged as `#rrggbb` text.
//! Parsing accepts upper or lower case and the `#rgb` shorthand;
//! formatting always produces lowercase `#rrggbb`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DocumentError;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Black, the color new documents draw with
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Creates a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    pub fn from_hex(text: &str) -> Result<Self, DocumentError> {
        let invalid = || DocumentError::InvalidColor {
            value: text.to_string(),
        };
        let digits = text.trim().strip_prefix('#').unwrap_or(text.trim());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                Ok(Self::rgb(
                    (value >> 16) as u8,
                    (value >> 8) as u8,
                    value as u8,
                ))
            }
            3 => {
                let value = u16::from_str_radix(digits, 16).map_err(|_| invalid())?;
                let expand = |nibble: u16| (nibble as u8 & 0x0f) * 0x11;
                Ok(Self::rgb(
                    expand(value >> 8),
                    expand(value >> 4),
                    expand(value),
                ))
            }
            _ => Err(invalid()),
        }
    }

    /// Formats as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
