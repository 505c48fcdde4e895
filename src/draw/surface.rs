//! Reading and writing single pixels of Cairo image surfaces.
//!
//! Cairo stores `ARgb32` as native-endian 32-bit words with premultiplied
//! alpha, which is [`Bgra32`](crate::codec::Bgra32) on little-endian hosts.
//! Pixels therefore come back as [`PremultipliedColor`]. The module is only
//! built for little-endian targets.

use super::error::SurfaceError;
use crate::codec::PixelBuffer;
use crate::color::{Channels, PremultipliedColor};

fn check_format(surface: &cairo::ImageSurface) -> Result<(), SurfaceError> {
    match surface.format() {
        cairo::Format::ARgb32 => Ok(()),
        other => Err(SurfaceError::UnsupportedFormat(other)),
    }
}

/// Runs `f` on the surface memory viewed as a [`PixelBuffer`].
///
/// Pending drawing is flushed first. Cairo marks the surface dirty when the
/// data borrow ends.
///
/// # Errors
/// - [`SurfaceError::UnsupportedFormat`] for anything but `ARgb32`
/// - [`SurfaceError::Borrow`] if another reference to the surface is alive
///   (e.g. a `cairo::Context` that has not been dropped)
pub fn with_pixels<T>(
    surface: &mut cairo::ImageSurface,
    f: impl FnOnce(&mut PixelBuffer<'_>) -> Result<T, SurfaceError>,
) -> Result<T, SurfaceError> {
    check_format(surface)?;
    surface.flush();
    let width = surface.width().max(0) as usize;
    let height = surface.height().max(0) as usize;
    let stride = surface.stride().max(0) as usize;
    let mut data = surface.data()?;
    let mut pixels = PixelBuffer::new(&mut data, width, height, stride)?;
    f(&mut pixels)
}

/// Reads the pixel at `(x, y)` as a premultiplied color.
pub fn read_pixel(
    surface: &mut cairo::ImageSurface,
    x: usize,
    y: usize,
) -> Result<PremultipliedColor, SurfaceError> {
    with_pixels(surface, |pixels| Ok(pixels.get(x, y)?))
}

/// Writes `color` into the pixel at `(x, y)`.
///
/// The color's channels are stored as given; pass a [`PremultipliedColor`]
/// to match what Cairo expects in `ARgb32` memory.
pub fn write_pixel<C: Channels>(
    surface: &mut cairo::ImageSurface,
    x: usize,
    y: usize,
    color: C,
) -> Result<(), SurfaceError> {
    with_pixels(surface, |pixels| Ok(pixels.put(x, y, color)?))
}

#[cfg(test)]
mod tests {
    use crate::codec::{Bgra32, PixelCodec};
    use crate::color::PremultipliedColor;

    #[test]
    fn bgra32_bytes_form_a_native_argb_word() {
        let mut bytes = [0u8; 4];
        let color: PremultipliedColor = Bgra32.decode(&[0x40, 0x80, 0xc0, 0xff]).unwrap();
        Bgra32.encode(&mut bytes, color).unwrap();
        assert_eq!(u32::from_ne_bytes(bytes), 0xffc0_8040);
    }
}
