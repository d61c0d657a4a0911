use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Decode a source image from disk and convert it to RGBA8.
///
/// The existence check runs first so a missing file surfaces as
/// `Error::MissingSource` naming the path, not as a bare I/O error.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(Error::MissingSource {
            path: path.to_path_buf(),
        });
    }

    let image = image::open(path)?;
    debug!(
        "Loaded {:?}: {}x{}, {:?}",
        path,
        image.width(),
        image.height(),
        image.color()
    );

    Ok(image.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn missing_file_names_the_path() {
        let result = load_rgba(Path::new("/nonexistent/icon.png"));
        match result {
            Err(Error::MissingSource { path }) => {
                assert_eq!(path, Path::new("/nonexistent/icon.png"))
            }
            other => panic!("expected MissingSource, got {other:?}"),
        }
    }

    #[test]
    fn undecodable_file_is_an_image_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icon.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(matches!(load_rgba(&path), Err(Error::Image(_))));
    }

    #[test]
    fn decodes_to_rgba8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("icon.png");
        let source = RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255]));
        source.save(&path).unwrap();

        let loaded = load_rgba(&path).unwrap();
        assert_eq!(loaded.dimensions(), (8, 8));
        assert_eq!(loaded.get_pixel(4, 4), &Rgba([255, 0, 0, 255]));
    }
}
