//! Errors raised while handing colors to Cairo.

use thiserror::Error;

use crate::color::ColorError;

/// Errors that can occur when drawing with or reading from Cairo surfaces.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface data unavailable: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("Unsupported surface format {0:?}, expected ARgb32")]
    UnsupportedFormat(cairo::Format),

    #[error(transparent)]
    Color(#[from] ColorError),
}
