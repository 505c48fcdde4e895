//! Cairo glue for colors.
//!
//! This module connects the color model to Cairo:
//! - [`set_source_color`] / [`fill_color`]: solid sources on a `cairo::Context`
//! - `read_pixel` / `write_pixel` / `with_pixels`: `ARgb32` image memory
//!   (little-endian hosts only, where it matches the BGRA32 byte order)
//! - [`SurfaceError`]: failures reported by Cairo or the pixel codec

pub mod error;
pub mod source;
#[cfg(target_endian = "little")]
pub mod surface;

pub use error::SurfaceError;
pub use source::{fill_color, set_source_color};
#[cfg(target_endian = "little")]
pub use surface::{read_pixel, with_pixels, write_pixel};
