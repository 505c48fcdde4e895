//! Color model: straight and premultiplied RGBA, packings and compositing.
//!
//! This module defines the color value types used with Cairo:
//! - [`StraightColor`]: non-premultiplied RGBA, the user-facing convention
//! - [`PremultipliedColor`]: channels scaled by alpha, used for compositing
//! - [`Rgba64`] / [`Rgba8`]: 16-bit premultiplied and 8-bit straight packings
//! - Hex parsing and predefined colors

pub mod channel;
pub mod error;
pub mod named;
pub mod over;
pub mod packed;
pub mod parse;
pub mod premultiplied;
pub mod straight;

pub use error::ColorError;
pub use named::{
    BLACK, BLUE, CYAN, GREEN, MAGENTA, RED, TRANSPARENT, WHITE, YELLOW, color_name,
    name_to_color,
};
pub use over::{over_all, over_premultiplied, over_straight};
pub use packed::{Rgba64, Rgba8};
pub use parse::{must_parse, parse_hex};
pub use premultiplied::PremultipliedColor;
pub use straight::StraightColor;

/// Access to four normalized `f64` channels, independent of how alpha is
/// stored.
///
/// Pixel codecs are generic over this trait so the caller decides whether
/// bytes are read as straight or premultiplied.
pub trait Channels: Copy {
    /// Builds the color, clamping each channel.
    fn from_channels(r: f64, g: f64, b: f64, a: f64) -> Self;

    /// Returns `[r, g, b, a]`.
    fn channels(&self) -> [f64; 4];
}
