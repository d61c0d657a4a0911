//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, decode/encode, and resizer errors, and provides
//! semantic variants for parameter validation and processing failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Pixel buffer error: {0}")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Source icon not found: {path:?}")]
    MissingSource { path: PathBuf },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("Padding ratio must leave a visible safe zone (0.0 <= ratio < 0.5), got: {ratio}")]
    InvalidPaddingRatio { ratio: f64 },

    #[error("Processing error: {0}")]
    Processing(String),
}
