//! Stroke and background colors, parsed from CSS-style names or hex strings.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized color '{0}' (expected a color name, #rgb, or #rrggbb)")]
pub struct ColorParseError(String);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn as_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xFF]
    }
}

/// The CSS basic color keywords plus a few common extras.
const NAMED: &[(&str, Color)] = &[
    ("black", Color::rgb(0x00, 0x00, 0x00)),
    ("silver", Color::rgb(0xC0, 0xC0, 0xC0)),
    ("gray", Color::rgb(0x80, 0x80, 0x80)),
    ("grey", Color::rgb(0x80, 0x80, 0x80)),
    ("white", Color::rgb(0xFF, 0xFF, 0xFF)),
    ("maroon", Color::rgb(0x80, 0x00, 0x00)),
    ("red", Color::rgb(0xFF, 0x00, 0x00)),
    ("purple", Color::rgb(0x80, 0x00, 0x80)),
    ("fuchsia", Color::rgb(0xFF, 0x00, 0xFF)),
    ("magenta", Color::rgb(0xFF, 0x00, 0xFF)),
    ("green", Color::rgb(0x00, 0x80, 0x00)),
    ("lime", Color::rgb(0x00, 0xFF, 0x00)),
    ("olive", Color::rgb(0x80, 0x80, 0x00)),
    ("yellow", Color::rgb(0xFF, 0xFF, 0x00)),
    ("navy", Color::rgb(0x00, 0x00, 0x80)),
    ("blue", Color::rgb(0x00, 0x00, 0xFF)),
    ("teal", Color::rgb(0x00, 0x80, 0x80)),
    ("aqua", Color::rgb(0x00, 0xFF, 0xFF)),
    ("cyan", Color::rgb(0x00, 0xFF, 0xFF)),
    ("orange", Color::rgb(0xFF, 0xA5, 0x00)),
    ("pink", Color::rgb(0xFF, 0xC0, 0xCB)),
    ("brown", Color::rgb(0xA5, 0x2A, 0x2A)),
];

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError(s.to_string()));
        }
        let lower = trimmed.to_ascii_lowercase();
        NAMED
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|&(_, color)| color)
            .ok_or_else(|| ColorParseError(s.to_string()))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |i| u8::from_str_radix(&hex[i..i + 1], 16).ok();
            let (r, g, b) = (digit(0)?, digit(1)?, digit(2)?);
            // #abc expands to #aabbcc.
            Some(Color::rgb(r * 17, g * 17, b * 17))
        }
        6 => {
            let byte = |i| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_colors_case_insensitively() {
        assert_eq!("white".parse::<Color>().unwrap(), Color::rgb(255, 255, 255));
        assert_eq!("Black".parse::<Color>().unwrap(), Color::rgb(0, 0, 0));
        assert_eq!("ORANGE".parse::<Color>().unwrap(), Color::rgb(0xFF, 0xA5, 0x00));
    }

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!("#1a2b3c".parse::<Color>().unwrap(), Color::rgb(0x1A, 0x2B, 0x3C));
        assert_eq!("#FFFFFF".parse::<Color>().unwrap(), Color::rgb(255, 255, 255));
    }

    #[test]
    fn parses_three_digit_hex() {
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::rgb(255, 255, 255));
        assert_eq!("#08f".parse::<Color>().unwrap(), Color::rgb(0x00, 0x88, 0xFF));
    }

    #[test]
    fn rejects_junk() {
        assert!("notacolor".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
        assert!("#gggggg".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn rgba_has_opaque_alpha() {
        assert_eq!(Color::rgb(1, 2, 3).as_rgba(), [1, 2, 3, 0xFF]);
    }
}
