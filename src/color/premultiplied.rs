//! Premultiplied-alpha RGBA color, the representation used for compositing.

use super::channel::{clamp01, from_u16, to_u16};
use super::packed::Rgba64;
use super::straight::StraightColor;
use super::Channels;

/// RGBA color whose red, green and blue channels are already scaled by alpha.
///
/// In exact arithmetic `r`, `g` and `b` never exceed `a`; rounding at the
/// boundary may break that by an ulp. Components are clamped to 0.0-1.0 on
/// construction like [`StraightColor`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PremultipliedColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl PremultipliedColor {
    /// Creates a color from already premultiplied components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: clamp01(r),
            g: clamp01(g),
            b: clamp01(b),
            a: clamp01(a),
        }
    }

    /// Red component, already scaled by alpha
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Green component, already scaled by alpha
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Blue component, already scaled by alpha
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Components as `[r, g, b, a]`.
    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Divides the color channels by alpha.
    ///
    /// A zero alpha maps to transparent black: the original channels are
    /// lost once multiplied by zero, and black is the placeholder.
    pub fn unpremultiply(self) -> StraightColor {
        if self.a == 0.0 {
            return super::TRANSPARENT;
        }
        StraightColor::new(self.r / self.a, self.g / self.a, self.b / self.a, self.a)
    }

    /// Porter-Duff `self` over `dst`, both premultiplied.
    ///
    /// Every channel, alpha included, is `dst * (1 - self.a) + self`. There
    /// is no division, so no special case.
    #[must_use]
    pub fn over(self, dst: PremultipliedColor) -> PremultipliedColor {
        let k = 1.0 - self.a;
        Self::new(
            dst.r * k + self.r,
            dst.g * k + self.g,
            dst.b * k + self.b,
            dst.a * k + self.a,
        )
    }

    /// Quantizes each channel to 16 bits.
    pub fn to_rgba64(self) -> Rgba64 {
        Rgba64 {
            r: to_u16(self.r),
            g: to_u16(self.g),
            b: to_u16(self.b),
            a: to_u16(self.a),
        }
    }
}

impl Channels for PremultipliedColor {
    fn from_channels(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new(r, g, b, a)
    }

    fn channels(&self) -> [f64; 4] {
        self.to_array()
    }
}

impl From<StraightColor> for PremultipliedColor {
    fn from(c: StraightColor) -> Self {
        c.premultiply()
    }
}

impl From<Rgba64> for PremultipliedColor {
    fn from(c: Rgba64) -> Self {
        Self::new(from_u16(c.r), from_u16(c.g), from_u16(c.b), from_u16(c.a))
    }
}
