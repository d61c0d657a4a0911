use image::{Rgba, RgbaImage, imageops};
use tracing::debug;

use crate::core::params::IconParams;
use crate::core::processing::resize::resize_rgba;
use crate::error::Result;

/// Render the adaptive-icon foreground: the source resized into the centered
/// safe zone of a fully transparent canvas.
///
/// The safe zone is the central region guaranteed to survive any launcher
/// mask shape; everything outside it is padding. Non-square sources are
/// stretched to the square safe zone, matching how the assets were produced
/// historically.
pub fn render_adaptive_icon(source: &RgbaImage, params: &IconParams) -> Result<RgbaImage> {
    params.validate()?;

    let safe_zone = params.safe_zone_size();
    let offset = params.offset();
    debug!(
        "Adaptive icon: canvas {}x{}, safe zone {}x{}, padding {}px per side",
        params.size, params.size, safe_zone, safe_zone, offset
    );

    let resized = resize_rgba(source, safe_zone, safe_zone, params.filter)?;

    let mut canvas = RgbaImage::from_pixel(params.size, params.size, Rgba([0, 0, 0, 0]));
    imageops::overlay(&mut canvas, &resized, offset as i64, offset as i64);

    Ok(canvas)
}
