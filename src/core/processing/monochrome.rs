use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::core::params::IconParams;
use crate::core::processing::resize::resize_rgba;
use crate::error::Result;

/// Remap every pixel with any opacity to opaque white, keeping its alpha.
/// Fully transparent pixels become transparent black.
pub fn remap_to_white(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let alpha = pixel[3];
        *pixel = if alpha > 0 {
            Rgba([255, 255, 255, alpha])
        } else {
            Rgba([0, 0, 0, 0])
        };
    }
}

/// Render the monochrome silhouette variant: remap to white, then resize to
/// the target size.
///
/// The remap runs before the resize, so anti-aliased edges produced by the
/// resampling are driven by the original alpha channel only.
pub fn render_monochrome_icon(source: &RgbaImage, params: &IconParams) -> Result<RgbaImage> {
    params.validate()?;

    debug!(
        "Monochrome icon: {}x{} -> {}x{}",
        source.width(),
        source.height(),
        params.size,
        params.size
    );

    let mut white = source.clone();
    remap_to_white(&mut white);
    resize_rgba(&white, params.size, params.size, params.filter)
}
