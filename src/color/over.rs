//! Porter-Duff "over" in (destination, source) argument order.
//!
//! Straight and premultiplied colors use different arithmetic; the two
//! functions take distinct types so they cannot be swapped by accident.

use super::premultiplied::PremultipliedColor;
use super::straight::StraightColor;

/// `src` over `dst` in straight alpha. See [`StraightColor::over`].
pub fn over_straight(dst: StraightColor, src: StraightColor) -> StraightColor {
    src.over(dst)
}

/// `src` over `dst` in premultiplied alpha. See [`PremultipliedColor::over`].
pub fn over_premultiplied(dst: PremultipliedColor, src: PremultipliedColor) -> PremultipliedColor {
    src.over(dst)
}

/// Composites `layers` bottom to top onto `dst`.
pub fn over_all<I>(dst: PremultipliedColor, layers: I) -> PremultipliedColor
where
    I: IntoIterator<Item = PremultipliedColor>,
{
    layers.into_iter().fold(dst, over_premultiplied)
}
