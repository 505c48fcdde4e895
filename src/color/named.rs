//! Predefined straight-alpha colors and name lookup.

use super::straight::StraightColor;

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// White (R=1.0, G=1.0, B=1.0)
pub const WHITE: StraightColor = StraightColor::from_raw(1.0, 1.0, 1.0, 1.0);

/// Black (R=0.0, G=0.0, B=0.0)
pub const BLACK: StraightColor = StraightColor::from_raw(0.0, 0.0, 0.0, 1.0);

/// Red (R=1.0, G=0.0, B=0.0)
pub const RED: StraightColor = StraightColor::from_raw(1.0, 0.0, 0.0, 1.0);

/// Web green, `#008000` (G=128/255)
pub const GREEN: StraightColor = StraightColor::from_raw(0.0, 128.0 / 255.0, 0.0, 1.0);

/// Blue (R=0.0, G=0.0, B=1.0)
pub const BLUE: StraightColor = StraightColor::from_raw(0.0, 0.0, 1.0, 1.0);

/// Yellow (R=1.0, G=1.0, B=0.0)
pub const YELLOW: StraightColor = StraightColor::from_raw(1.0, 1.0, 0.0, 1.0);

/// Cyan (R=0.0, G=1.0, B=1.0)
pub const CYAN: StraightColor = StraightColor::from_raw(0.0, 1.0, 1.0, 1.0);

/// Magenta (R=1.0, G=0.0, B=1.0)
pub const MAGENTA: StraightColor = StraightColor::from_raw(1.0, 0.0, 1.0, 1.0);

/// Fully transparent black, also the result of every zero-alpha division.
pub const TRANSPARENT: StraightColor = StraightColor::from_raw(0.0, 0.0, 0.0, 0.0);

const PALETTE: [(&str, StraightColor); 9] = [
    ("white", WHITE),
    ("black", BLACK),
    ("red", RED),
    ("green", GREEN),
    ("blue", BLUE),
    ("yellow", YELLOW),
    ("cyan", CYAN),
    ("magenta", MAGENTA),
    ("transparent", TRANSPARENT),
];

/// Maps color name strings to predefined colors.
///
/// # Supported Names (case-insensitive)
/// - "white", "black", "red", "green", "blue", "yellow", "cyan", "magenta",
///   "transparent"
pub fn name_to_color(name: &str) -> Option<StraightColor> {
    PALETTE
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, c)| *c)
}

/// Returns the palette name of a color, if it matches one exactly.
pub fn color_name(color: &StraightColor) -> Option<&'static str> {
    PALETTE.iter().find(|(_, c)| c == color).map(|(n, _)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::must_parse;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(name_to_color("Red"), Some(RED));
        assert_eq!(name_to_color("MAGENTA"), Some(MAGENTA));
        assert_eq!(name_to_color("chartreuse"), None);
    }

    #[test]
    fn constants_match_hex_notation() {
        assert_eq!(must_parse("#fff"), WHITE);
        assert_eq!(must_parse("#000"), BLACK);
        assert_eq!(must_parse("#008000"), GREEN);
        assert_eq!(must_parse("#0ff"), CYAN);
        assert_eq!(must_parse("#00000000"), TRANSPARENT);
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(color_name(&BLUE), Some("blue"));
        assert_eq!(color_name(&StraightColor::new(0.5, 0.5, 0.5, 1.0)), None);
    }
}
