use fast_image_resize::{PixelType, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::ResizeFilter;

/// Resize an RGBA8 buffer to exact target dimensions.
///
/// Aspect ratio is not preserved; callers pick target dimensions themselves.
/// Resizing to the current dimensions returns a copy without touching the
/// resizer.
pub fn resize_rgba(
    source: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: ResizeFilter,
) -> Result<RgbaImage> {
    if source.dimensions() == (target_width, target_height) {
        return Ok(source.clone());
    }

    debug!(
        "Resizing {}x{} -> {}x{} ({})",
        source.width(),
        source.height(),
        target_width,
        target_height,
        filter
    );

    let resize_options = ResizeOptions::new().resize_alg(filter.to_resize_alg());
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        source.width(),
        source.height(),
        source.as_raw().clone(),
        PixelType::U8x4,
    )?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| Error::Processing("resized pixel buffer has unexpected length".to_string()))
}
