//! Errors raised by color parsing and pixel encoding.

use thiserror::Error;

/// Errors that can occur while parsing colors or accessing pixel memory.
///
/// Out-of-range channel values are never reported here; they are clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color ({input}): {reason}")]
    InvalidFormat { input: String, reason: &'static str },

    #[error("insufficient buffer: need {needed} bytes, got {actual}")]
    InsufficientBuffer { needed: usize, actual: usize },

    #[error("pixel ({x}, {y}) outside {width}x{height} buffer")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl ColorError {
    pub(crate) fn invalid(input: &str, reason: &'static str) -> Self {
        ColorError::InvalidFormat {
            input: input.to_string(),
            reason,
        }
    }
}
