//! Non-premultiplied ("straight alpha") RGBA color.

use super::channel::{MAX_U16, clamp01, from_u8, from_u16, lerp, to_u8, to_u16};
use super::packed::{Rgba64, Rgba8};
use super::premultiplied::PremultipliedColor;
use super::Channels;

/// Represents an RGBA color whose red, green and blue channels are
/// independent of alpha.
///
/// All components are clamped to the range 0.0 (minimum) to 1.0 (maximum)
/// when the color is built. A fully transparent color (`a == 0.0`) still
/// carries its red, green and blue values.
///
/// # Examples
///
/// ```
/// use colorf::StraightColor;
/// let orange = StraightColor::new(1.0, 0.5, 0.0, 1.0);
/// let half_blue = StraightColor::new(0.0, 0.0, 1.0, 0.5);
/// assert_eq!(StraightColor::new(2.0, -1.0, 0.5, 1.0).to_array(), [1.0, 0.0, 0.5, 1.0]);
/// # let _ = (orange, half_blue);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StraightColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl StraightColor {
    /// Creates a color from RGBA components, clamping each to 0.0-1.0.
    ///
    /// Out-of-range input is never an error.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: clamp01(r),
            g: clamp01(g),
            b: clamp01(b),
            a: clamp01(a),
        }
    }

    /// Creates a fully opaque color.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub(crate) const fn from_raw(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Red component (0.0 = no red, 1.0 = full red)
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Green component (0.0 = no green, 1.0 = full green)
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Blue component (0.0 = no blue, 1.0 = full blue)
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

    /// Returns `true` only for alpha exactly 1.0.
    pub fn is_opaque(&self) -> bool {
        self.a == 1.0
    }

    /// Returns `true` for alpha exactly 0.0.
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    /// Same color with a different alpha.
    #[must_use]
    pub fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Scales red, green and blue by alpha.
    pub fn premultiply(self) -> PremultipliedColor {
        PremultipliedColor::new(self.r * self.a, self.g * self.a, self.b * self.a, self.a)
    }

    /// Porter-Duff `self` over `dst`, both in straight alpha.
    ///
    /// The result alpha is `lerp(dst.a, 1, self.a)` and every color channel
    /// is divided by it. When that alpha is zero the result is transparent
    /// black instead of NaN.
    #[must_use]
    pub fn over(self, dst: StraightColor) -> StraightColor {
        let a = lerp(dst.a, 1.0, self.a);
        if a == 0.0 {
            return super::TRANSPARENT;
        }
        Self::new(
            lerp(dst.r * dst.a, self.r, self.a) / a,
            lerp(dst.g * dst.a, self.g, self.a) / a,
            lerp(dst.b * dst.a, self.b, self.a) / a,
            a,
        )
    }

    /// Quantizes each channel to 8 bits, keeping straight alpha.
    pub fn to_rgba8(self) -> Rgba8 {
        Rgba8::new(to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a))
    }

    /// Packs into 16-bit premultiplied channels.
    ///
    /// Channels are quantized first and then premultiplied with truncating
    /// integer arithmetic, matching the 16-bit packing used by the native
    /// binding.
    pub fn to_rgba64(self) -> Rgba64 {
        let r = to_u16(self.r) as u32;
        let g = to_u16(self.g) as u32;
        let b = to_u16(self.b) as u32;
        let a = to_u16(self.a) as u32;
        Rgba64 {
            r: (r * a / MAX_U16) as u16,
            g: (g * a / MAX_U16) as u16,
            b: (b * a / MAX_U16) as u16,
            a: a as u16,
        }
    }
}

impl Channels for StraightColor {
    fn from_channels(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new(r, g, b, a)
    }

    fn channels(&self) -> [f64; 4] {
        self.to_array()
    }
}

impl From<PremultipliedColor> for StraightColor {
    fn from(c: PremultipliedColor) -> Self {
        c.unpremultiply()
    }
}

/// Unpacks premultiplied 16-bit channels.
///
/// Zero alpha yields transparent black since the original channels cannot
/// be recovered.
impl From<Rgba64> for StraightColor {
    fn from(c: Rgba64) -> Self {
        match c.a as u32 {
            0 => super::TRANSPARENT,
            MAX_U16 => Self::new(from_u16(c.r), from_u16(c.g), from_u16(c.b), 1.0),
            a => {
                let a = a as f64;
                Self::new(
                    c.r as f64 / a,
                    c.g as f64 / a,
                    c.b as f64 / a,
                    a / MAX_U16 as f64,
                )
            }
        }
    }
}

impl From<Rgba8> for StraightColor {
    fn from(c: Rgba8) -> Self {
        Self::new(from_u8(c.r), from_u8(c.g), from_u8(c.b), from_u8(c.a))
    }
}
