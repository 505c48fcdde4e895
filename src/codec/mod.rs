//! Packed pixel codecs for raw surface memory.
//!
//! - [`PixelCodec`]: encode/decode one color to/from a byte window
//! - [`Bgra32`]: Cairo `ARgb32` layout on little-endian hosts
//! - [`PixelBuffer`]: strided 2D access over caller-owned bytes
//!
//! Codecs never convert between straight and premultiplied alpha. The type
//! parameter picked by the caller decides how the bytes are interpreted.

pub mod buffer;

pub use buffer::PixelBuffer;

use crate::color::channel::{from_u8, to_u8};
use crate::color::{Channels, ColorError};

/// Fixed-size pixel encoding.
pub trait PixelCodec {
    /// Bytes per pixel.
    const SIZE: usize;

    /// Bytes per pixel, for callers holding a codec value.
    fn size(&self) -> usize {
        Self::SIZE
    }

    /// Writes `color` into the first [`Self::SIZE`] bytes of `buf`.
    ///
    /// # Errors
    /// [`ColorError::InsufficientBuffer`] if `buf` is too short. Nothing is
    /// written in that case.
    fn encode<C: Channels>(&self, buf: &mut [u8], color: C) -> Result<(), ColorError>;

    /// Reads a color from the first [`Self::SIZE`] bytes of `buf`.
    ///
    /// # Errors
    /// [`ColorError::InsufficientBuffer`] if `buf` is too short.
    fn decode<C: Channels>(&self, buf: &[u8]) -> Result<C, ColorError>;
}

/// Blue, green, red, alpha byte order, 8 bits each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bgra32;

impl Bgra32 {
    fn check(len: usize) -> Result<(), ColorError> {
        if len < Self::SIZE {
            return Err(ColorError::InsufficientBuffer {
                needed: Self::SIZE,
                actual: len,
            });
        }
        Ok(())
    }
}

impl PixelCodec for Bgra32 {
    const SIZE: usize = 4;

    fn encode<C: Channels>(&self, buf: &mut [u8], color: C) -> Result<(), ColorError> {
        Self::check(buf.len())?;
        let [r, g, b, a] = color.channels();
        buf[0] = to_u8(b);
        buf[1] = to_u8(g);
        buf[2] = to_u8(r);
        buf[3] = to_u8(a);
        Ok(())
    }

    fn decode<C: Channels>(&self, buf: &[u8]) -> Result<C, ColorError> {
        Self::check(buf.len())?;
        Ok(C::from_channels(
            from_u8(buf[2]),
            from_u8(buf[1]),
            from_u8(buf[0]),
            from_u8(buf[3]),
        ))
    }
}
