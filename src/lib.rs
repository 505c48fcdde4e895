//! Color model for Cairo: straight and premultiplied RGBA, compositing,
//! and the BGRA32 pixel codec.
//!
//! Exposes the color types alongside the codec and the Cairo glue so that
//! drawing code can pick a color, convert it to the representation an
//! operation needs, and either hand it to a `cairo::Context` or write it
//! into raw `ARgb32` surface memory.
//!
//! ```
//! use colorf::{PremultipliedColor, StraightColor};
//! use colorf::codec::{Bgra32, PixelCodec};
//!
//! let src: StraightColor = "#ff000080".parse().unwrap();
//! let dst: StraightColor = "#fff".parse().unwrap();
//! let out: PremultipliedColor = src.premultiply().over(dst.premultiply());
//!
//! let mut px = [0u8; 4];
//! Bgra32.encode(&mut px, out).unwrap();
//! assert_eq!(px, [127, 127, 255, 255]);
//! ```

pub mod codec;
pub mod color;
pub mod config;
pub mod draw;

pub use color::{ColorError, PremultipliedColor, Rgba64, Rgba8, StraightColor};
pub use config::Config;
