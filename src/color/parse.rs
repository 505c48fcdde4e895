//! Hex color notation: `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`.

use std::str::FromStr;

use super::channel::{decode_nibble, nibbles_to_byte};
use super::error::ColorError;
use super::packed::Rgba8;
use super::straight::StraightColor;

/// Parses a hex color into straight 8-bit channels.
///
/// Short forms repeat each digit (`#a` → `0xaa`); a missing alpha is `0xff`.
/// Digits are case-insensitive.
///
/// # Errors
/// [`ColorError::InvalidFormat`] when the `#` prefix is missing, a character
/// is not a hex digit, or the digit count is not 3, 4, 6 or 8.
pub fn parse_hex(s: &str) -> Result<Rgba8, ColorError> {
    let digits = s
        .as_bytes()
        .strip_prefix(b"#")
        .ok_or_else(|| ColorError::invalid(s, "no symbol '#'"))?;

    // Only eight nibbles are ever needed; longer input is rejected below.
    let mut ns = [0u8; 8];
    for (i, &c) in digits.iter().enumerate() {
        let n = decode_nibble(c).ok_or_else(|| ColorError::invalid(s, "not a hex digit"))?;
        if let Some(slot) = ns.get_mut(i) {
            *slot = n;
        }
    }

    let color = match digits.len() {
        3 => Rgba8::new(
            nibbles_to_byte(ns[0], ns[0]),
            nibbles_to_byte(ns[1], ns[1]),
            nibbles_to_byte(ns[2], ns[2]),
            0xff,
        ),
        4 => Rgba8::new(
            nibbles_to_byte(ns[0], ns[0]),
            nibbles_to_byte(ns[1], ns[1]),
            nibbles_to_byte(ns[2], ns[2]),
            nibbles_to_byte(ns[3], ns[3]),
        ),
        6 => Rgba8::new(
            nibbles_to_byte(ns[0], ns[1]),
            nibbles_to_byte(ns[2], ns[3]),
            nibbles_to_byte(ns[4], ns[5]),
            0xff,
        ),
        8 => Rgba8::new(
            nibbles_to_byte(ns[0], ns[1]),
            nibbles_to_byte(ns[2], ns[3]),
            nibbles_to_byte(ns[4], ns[5]),
            nibbles_to_byte(ns[6], ns[7]),
        ),
        _ => return Err(ColorError::invalid(s, "expected 3, 4, 6 or 8 hex digits")),
    };
    Ok(color)
}

/// Parses a hex color, panicking on malformed input.
///
/// Meant for literals known to be valid, such as constant palettes.
///
/// # Panics
/// If `s` is not a valid hex color.
pub fn must_parse(s: &str) -> StraightColor {
    match s.parse() {
        Ok(color) => color,
        Err(err) => panic!("{err}"),
    }
}

impl FromStr for Rgba8 {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl FromStr for StraightColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(StraightColor::from)
    }
}
