//! Setting Cairo paint sources from colors.

use super::error::SurfaceError;
use crate::color::StraightColor;
use log::debug;

/// Sets the source of `ctx` to a solid color.
///
/// Fully opaque colors (alpha exactly 1.0) go through `set_source_rgb` so
/// Cairo can skip alpha blending; everything else uses `set_source_rgba`.
///
/// # Arguments
/// * `ctx` - Cairo drawing context
/// * `color` - Straight-alpha color, as Cairo expects
pub fn set_source_color(ctx: &cairo::Context, color: StraightColor) {
    if color.is_opaque() {
        ctx.set_source_rgb(color.r(), color.g(), color.b());
    } else {
        ctx.set_source_rgba(color.r(), color.g(), color.b(), color.a());
    }
}

/// Paints the whole target of `ctx` with `color`.
///
/// Translucent colors replace the existing pixels (`Operator::Source`)
/// instead of blending over them. The context state is restored afterwards.
///
/// # Errors
/// Returns [`SurfaceError::Cairo`] if Cairo fails to save, paint or restore.
pub fn fill_color(ctx: &cairo::Context, color: StraightColor) -> Result<(), SurfaceError> {
    ctx.save()?;
    set_source_color(ctx, color);
    if !color.is_opaque() {
        debug!("Filling with translucent color, using source operator");
        ctx.set_operator(cairo::Operator::Source);
    }
    let painted = ctx.paint();
    ctx.restore()?;
    painted?;
    Ok(())
}
