//! Strided pixel access over caller-owned memory.

use super::{Bgra32, PixelCodec};
use crate::color::{Channels, ColorError};

/// A row-major BGRA32 image borrowed from the caller.
///
/// Pixel `(x, y)` lives at byte `y * stride + x * 4`. The mutable borrow
/// gives this view exclusive access for its lifetime.
#[derive(Debug)]
pub struct PixelBuffer<'a> {
    data: &'a mut [u8],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> PixelBuffer<'a> {
    /// Wraps `data` as a `width` x `height` image with `stride` bytes per row.
    ///
    /// # Errors
    /// [`ColorError::InsufficientBuffer`] if a row does not fit in `stride`
    /// or `data` is shorter than `stride * height`. Sizes that overflow
    /// `usize` are reported as needing `usize::MAX` bytes.
    pub fn new(
        data: &'a mut [u8],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<Self, ColorError> {
        let row = width.checked_mul(Bgra32::SIZE).unwrap_or(usize::MAX);
        if stride < row {
            return Err(ColorError::InsufficientBuffer {
                needed: row,
                actual: stride,
            });
        }
        let needed = stride.checked_mul(height).unwrap_or(usize::MAX);
        if data.len() < needed {
            return Err(ColorError::InsufficientBuffer {
                needed,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize, ColorError> {
        if x >= self.width || y >= self.height {
            return Err(ColorError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.stride + x * Bgra32::SIZE)
    }

    /// Decodes the pixel at `(x, y)`.
    pub fn get<C: Channels>(&self, x: usize, y: usize) -> Result<C, ColorError> {
        let start = self.offset(x, y)?;
        Bgra32.decode(&self.data[start..start + Bgra32::SIZE])
    }

    /// Encodes `color` into the pixel at `(x, y)`.
    pub fn put<C: Channels>(&mut self, x: usize, y: usize, color: C) -> Result<(), ColorError> {
        let start = self.offset(x, y)?;
        Bgra32.encode(&mut self.data[start..start + Bgra32::SIZE], color)
    }

    /// Encodes `color` into every pixel, leaving row padding untouched.
    pub fn fill<C: Channels>(&mut self, color: C) -> Result<(), ColorError> {
        let row = self.width * Bgra32::SIZE;
        for y in 0..self.height {
            let start = y * self.stride;
            for px in self.data[start..start + row].chunks_exact_mut(Bgra32::SIZE) {
                Bgra32.encode(px, color)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLUE, PremultipliedColor, StraightColor, WHITE};

    #[test]
    fn rejects_short_stride_and_data() {
        let mut data = vec![0u8; 16];
        assert!(matches!(
            PixelBuffer::new(&mut data, 3, 1, 8),
            Err(ColorError::InsufficientBuffer {
                needed: 12,
                actual: 8
            })
        ));
        assert!(matches!(
            PixelBuffer::new(&mut data, 2, 3, 8),
            Err(ColorError::InsufficientBuffer {
                needed: 24,
                actual: 16
            })
        ));
        assert!(PixelBuffer::new(&mut data, 2, 2, 8).is_ok());
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let mut data = [0u8; 16];
        assert!(matches!(
            PixelBuffer::new(&mut data, usize::MAX / 2, 1, 8),
            Err(ColorError::InsufficientBuffer {
                needed: usize::MAX,
                actual: 8
            })
        ));
        assert!(matches!(
            PixelBuffer::new(&mut data, 1, usize::MAX / 2, 8),
            Err(ColorError::InsufficientBuffer {
                needed: usize::MAX,
                actual: 16
            })
        ));
    }

    #[test]
    fn addresses_rows_by_stride() {
        let mut data = vec![0u8; 2 * 12];
        {
            let mut buf = PixelBuffer::new(&mut data, 2, 2, 12).unwrap();
            buf.put(1, 1, BLUE).unwrap();
            let c: StraightColor = buf.get(1, 1).unwrap();
            assert_eq!(c, BLUE);
        }
        assert_eq!(&data[16..20], &[255, 0, 0, 255]);
        assert!(data[..16].iter().all(|b| *b == 0));
    }

    #[test]
    fn out_of_bounds_is_an_error() {
        let mut data = vec![0u8; 16];
        let mut buf = PixelBuffer::new(&mut data, 2, 2, 8).unwrap();
        assert!(matches!(
            buf.get::<StraightColor>(2, 0),
            Err(ColorError::OutOfBounds { x: 2, y: 0, .. })
        ));
        assert!(buf.put(0, 2, WHITE).is_err());
    }

    #[test]
    fn fill_skips_row_padding() {
        let mut data = vec![0u8; 2 * 8];
        let mut buf = PixelBuffer::new(&mut data, 1, 2, 8).unwrap();
        buf.fill(PremultipliedColor::new(0.5, 0.5, 0.5, 0.5)).unwrap();
        assert_eq!(&data[0..4], &[128, 128, 128, 128]);
        assert_eq!(&data[4..8], &[0, 0, 0, 0]);
        assert_eq!(&data[8..12], &[128, 128, 128, 128]);
    }
}
