//! Colors for target feedback lines

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// An opaque RGB color, written as `RRGGBB` hex in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl LineColor {
    pub const GREEN: LineColor = LineColor::rgb(0, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for LineColor {
    fn default() -> Self {
        Self::GREEN
    }
}

impl fmt::Display for LineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for LineColor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DomainError::parse(format!(
                "Invalid color '{}': expected RRGGBB hex",
                s
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| DomainError::parse(format!("Invalid color '{}': {}", s, e)))
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for LineColor {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LineColor> for String {
    fn from(color: LineColor) -> String {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_or_without_hash() {
        assert_eq!("00FF00".parse::<LineColor>().unwrap(), LineColor::GREEN);
        assert_eq!(
            "#ff8000".parse::<LineColor>().unwrap(),
            LineColor::rgb(255, 128, 0)
        );
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!("green".parse::<LineColor>().is_err());
        assert!("00FF0".parse::<LineColor>().is_err());
    }

    #[test]
    fn displays_as_uppercase_hex() {
        assert_eq!(LineColor::rgb(10, 0, 255).to_string(), "0A00FF");
    }
}
