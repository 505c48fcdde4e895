//! Per-channel numeric helpers shared by every color representation.
//!
//! Rounding here decides the exact byte that ends up in a Cairo surface, so
//! these functions are kept deliberately small and bit-exact.

/// Largest 8-bit channel value.
pub const MAX_U8: f64 = 255.0;

/// Largest 16-bit channel value, the range of [`Rgba64`](super::Rgba64).
pub const MAX_U16: u32 = 0xffff;

/// Byte to normalized float, computed at compile time.
const BYTE_TO_FLOAT: [f64; 256] = {
    let mut table = [0.0; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = i as f64 / MAX_U8;
        i += 1;
    }
    table
};

/// Restricts a channel value to the inclusive range `0.0..=1.0`.
///
/// NaN collapses to `0.0` so a bad computation can never leak into a pixel.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Linear interpolation: `t == 0` yields `v0`, `t == 1` yields `v1`.
///
/// `t` is not clamped.
#[inline]
pub fn lerp(v0: f64, v1: f64, t: f64) -> f64 {
    (1.0 - t) * v0 + t * v1
}

/// Round half up (`floor(x + 0.5)`), not round-half-to-even.
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Quantizes a channel to 8 bits.
#[inline]
pub fn to_u8(x: f64) -> u8 {
    round_half_up(clamp01(x) * MAX_U8) as u8
}

/// Normalizes an 8-bit channel to `0.0..=1.0`.
#[inline]
pub fn from_u8(b: u8) -> f64 {
    BYTE_TO_FLOAT[b as usize]
}

/// Quantizes a channel to 16 bits.
#[inline]
pub fn to_u16(x: f64) -> u16 {
    round_half_up(clamp01(x) * MAX_U16 as f64) as u16
}

/// Normalizes a 16-bit channel to `0.0..=1.0`.
#[inline]
pub fn from_u16(v: u16) -> f64 {
    v as f64 / MAX_U16 as f64
}

/// Decodes one ASCII hex digit.
#[inline]
pub fn decode_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Joins two nibbles into a byte, high nibble first.
#[inline]
pub fn nibbles_to_byte(hi: u8, lo: u8) -> u8 {
    (hi << 4) | (lo & 0x0f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp01_limits_range() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(1.5), 1.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(f64::NAN), 0.0);
        assert_eq!(clamp01(f64::INFINITY), 1.0);
    }

    #[test]
    fn clamp01_is_idempotent() {
        for x in [-3.0, -0.0, 0.0, 0.1, 0.5, 0.999, 1.0, 7.0] {
            assert_eq!(clamp01(clamp01(x)), clamp01(x));
        }
    }

    #[test]
    fn lerp_endpoints_and_extrapolation() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        assert_eq!(lerp(2.0, 4.0, 2.0), 6.0);
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(1.5), 2.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4999), 2.0);
    }

    #[test]
    fn byte_quantization_is_stable() {
        for b in 0..=255u8 {
            assert_eq!(to_u8(from_u8(b)), b);
        }
        assert_eq!(to_u8(0.5), 128);
        assert_eq!(to_u8(2.0), 255);
    }

    #[test]
    fn word_quantization() {
        assert_eq!(to_u16(1.0), 0xffff);
        assert_eq!(to_u16(0.0), 0);
        assert_eq!(from_u16(0xffff), 1.0);
    }

    #[test]
    fn nibble_decoding() {
        assert_eq!(decode_nibble(b'0'), Some(0));
        assert_eq!(decode_nibble(b'9'), Some(9));
        assert_eq!(decode_nibble(b'a'), Some(10));
        assert_eq!(decode_nibble(b'F'), Some(15));
        assert_eq!(decode_nibble(b'g'), None);
        assert_eq!(decode_nibble(b'#'), None);
        assert_eq!(nibbles_to_byte(0xa, 0xa), 0xaa);
        assert_eq!(nibbles_to_byte(0x1, 0xf), 0x1f);
    }
}
