use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::Result;

/// Write an RGBA8 buffer as a PNG file.
///
/// Encoder settings are fixed (best compression, adaptive filtering) so
/// repeated runs over the same input produce byte-identical files.
pub fn write_rgba_png(output: &Path, image: &RgbaImage) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder =
        PngEncoder::new_with_quality(&mut writer, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    writer.flush()?;
    Ok(())
}
