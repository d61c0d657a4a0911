//! High-level, ergonomic library API: render icon variants to files or
//! in-memory buffers, plus a full-set helper that produces both Android
//! assets and reports the outcome. Prefer these entrypoints over the
//! low-level processing modules when integrating ADICON.
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::{info, warn};

use crate::core::params::IconParams;
use crate::core::processing::adaptive::render_adaptive_icon;
use crate::core::processing::monochrome::render_monochrome_icon;
use crate::error::Result;
use crate::io::reader::load_rgba;
use crate::io::writers::png::write_rgba_png;

/// Fixed output filename for the adaptive-icon foreground.
pub const FOREGROUND_FILENAME: &str = "android-icon-foreground.png";
/// Fixed output filename for the monochrome silhouette.
pub const MONOCHROME_FILENAME: &str = "android-icon-monochrome.png";

/// Outcome of a full icon-set run
#[derive(Debug, Clone, Default)]
pub struct IconSetReport {
    pub generated: usize,
    pub errors: usize,
    pub outputs: Vec<PathBuf>,
}

/// Render the adaptive-icon foreground in memory (no output file).
pub fn adaptive_icon_to_buffer(input: &Path, params: &IconParams) -> Result<RgbaImage> {
    let source = load_rgba(input)?;
    render_adaptive_icon(&source, params)
}

/// Render the monochrome silhouette in memory (no output file).
pub fn monochrome_icon_to_buffer(input: &Path, params: &IconParams) -> Result<RgbaImage> {
    let source = load_rgba(input)?;
    render_monochrome_icon(&source, params)
}

/// Generate the adaptive-icon foreground PNG at `output`.
pub fn generate_adaptive_icon(input: &Path, output: &Path, params: &IconParams) -> Result<()> {
    let icon = adaptive_icon_to_buffer(input, params)?;
    write_rgba_png(output, &icon)?;
    info!("Adaptive foreground saved: {:?}", output);
    Ok(())
}

/// Generate the monochrome silhouette PNG at `output`.
pub fn generate_monochrome_icon(input: &Path, output: &Path, params: &IconParams) -> Result<()> {
    let icon = monochrome_icon_to_buffer(input, params)?;
    write_rgba_png(output, &icon)?;
    info!("Monochrome icon saved: {:?}", output);
    Ok(())
}

/// Generate both Android assets into `out_dir` at their fixed filenames.
///
/// A missing or undecodable source is fatal and produces no outputs. After
/// that, a failure in one variant does not stop the other; the report carries
/// the aggregate outcome so callers can distinguish partial failure from
/// success programmatically.
pub fn generate_icon_set(
    source: &Path,
    out_dir: &Path,
    params: &IconParams,
) -> Result<IconSetReport> {
    params.validate()?;
    let decoded = load_rgba(source)?;

    let mut report = IconSetReport::default();

    let foreground = out_dir.join(FOREGROUND_FILENAME);
    match render_adaptive_icon(&decoded, params)
        .and_then(|icon| write_rgba_png(&foreground, &icon))
    {
        Ok(()) => {
            info!("Adaptive foreground saved: {:?}", foreground);
            report.generated += 1;
            report.outputs.push(foreground);
        }
        Err(e) => {
            warn!("Failed to generate adaptive foreground: {}", e);
            report.errors += 1;
        }
    }

    let monochrome = out_dir.join(MONOCHROME_FILENAME);
    match render_monochrome_icon(&decoded, params)
        .and_then(|icon| write_rgba_png(&monochrome, &icon))
    {
        Ok(()) => {
            info!("Monochrome icon saved: {:?}", monochrome);
            report.generated += 1;
            report.outputs.push(monochrome);
        }
        Err(e) => {
            warn!("Failed to generate monochrome icon: {}", e);
            report.errors += 1;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::ResizeFilter;
    use image::Rgba;
    use tempfile::tempdir;

    fn small_params() -> IconParams {
        IconParams {
            size: 64,
            padding_ratio: 0.25,
            filter: ResizeFilter::Lanczos,
        }
    }

    fn write_source(dir: &Path) -> PathBuf {
        let path = dir.join("icon.png");
        let source = RgbaImage::from_pixel(32, 32, Rgba([255, 0, 0, 255]));
        write_rgba_png(&path, &source).unwrap();
        path
    }

    #[test]
    fn generates_both_assets() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path());

        let report = generate_icon_set(&source, dir.path(), &small_params()).unwrap();

        assert_eq!(report.generated, 2);
        assert_eq!(report.errors, 0);
        assert_eq!(report.outputs.len(), 2);
        assert!(dir.path().join(FOREGROUND_FILENAME).exists());
        assert!(dir.path().join(MONOCHROME_FILENAME).exists());
    }

    #[test]
    fn outputs_have_target_dimensions() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path());

        generate_icon_set(&source, dir.path(), &small_params()).unwrap();

        let foreground = image::open(dir.path().join(FOREGROUND_FILENAME))
            .unwrap()
            .to_rgba8();
        let monochrome = image::open(dir.path().join(MONOCHROME_FILENAME))
            .unwrap()
            .to_rgba8();
        assert_eq!(foreground.dimensions(), (64, 64));
        assert_eq!(monochrome.dimensions(), (64, 64));
    }

    #[test]
    fn foreground_is_padded_and_monochrome_is_white() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path());

        generate_icon_set(&source, dir.path(), &small_params()).unwrap();

        let foreground = image::open(dir.path().join(FOREGROUND_FILENAME))
            .unwrap()
            .to_rgba8();
        assert_eq!(foreground.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(foreground.get_pixel(32, 32)[0], 255);
        assert_eq!(foreground.get_pixel(32, 32)[3], 255);

        let monochrome = image::open(dir.path().join(MONOCHROME_FILENAME))
            .unwrap()
            .to_rgba8();
        assert_eq!(monochrome.get_pixel(32, 32), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn missing_source_is_fatal_and_writes_nothing() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("icon.png");

        let result = generate_icon_set(&source, dir.path(), &small_params());

        assert!(matches!(result, Err(Error::MissingSource { .. })));
        assert!(!dir.path().join(FOREGROUND_FILENAME).exists());
        assert!(!dir.path().join(MONOCHROME_FILENAME).exists());
    }

    #[test]
    fn invalid_params_are_fatal_before_io() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path());
        let params = IconParams {
            padding_ratio: 0.75,
            ..small_params()
        };

        let result = generate_icon_set(&source, dir.path(), &params);

        assert!(matches!(result, Err(Error::InvalidPaddingRatio { .. })));
        assert!(!dir.path().join(FOREGROUND_FILENAME).exists());
    }

    #[test]
    fn reruns_are_byte_identical() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path());
        let out_first = tempdir().unwrap();
        let out_second = tempdir().unwrap();

        generate_icon_set(&source, out_first.path(), &small_params()).unwrap();
        generate_icon_set(&source, out_second.path(), &small_params()).unwrap();

        for name in [FOREGROUND_FILENAME, MONOCHROME_FILENAME] {
            assert_eq!(
                std::fs::read(out_first.path().join(name)).unwrap(),
                std::fs::read(out_second.path().join(name)).unwrap(),
                "{name} differs between runs"
            );
        }
    }

    #[test]
    fn single_variant_helpers_write_files() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path());

        let foreground = dir.path().join("fg.png");
        generate_adaptive_icon(&source, &foreground, &small_params()).unwrap();
        assert!(foreground.exists());

        let monochrome = dir.path().join("mono.png");
        generate_monochrome_icon(&source, &monochrome, &small_params()).unwrap();
        assert!(monochrome.exists());
    }

    #[test]
    fn buffer_helpers_match_target_size() {
        let dir = tempdir().unwrap();
        let source = write_source(dir.path());

        let foreground = adaptive_icon_to_buffer(&source, &small_params()).unwrap();
        assert_eq!(foreground.dimensions(), (64, 64));

        let monochrome = monochrome_icon_to_buffer(&source, &small_params()).unwrap();
        assert_eq!(monochrome.dimensions(), (64, 64));
    }
}
