use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::ResizeFilter;

/// Output edge length used when no size is given.
pub const DEFAULT_ICON_SIZE: u32 = 1080;
/// Fraction of the edge reserved as margin on each side.
pub const DEFAULT_PADDING_RATIO: f64 = 0.25;

/// Icon generation parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconParams {
    /// Output edge length in pixels (icons are always square)
    pub size: u32,
    /// Per-side margin as a fraction of `size`; 0.25 reserves 25% on each side
    pub padding_ratio: f64,
    /// Resampling filter used for every scaling step
    pub filter: ResizeFilter,
}

impl Default for IconParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_ICON_SIZE,
            padding_ratio: DEFAULT_PADDING_RATIO,
            filter: ResizeFilter::Lanczos,
        }
    }
}

impl IconParams {
    /// Edge length of the centered region the source is resized into.
    pub fn safe_zone_size(&self) -> u32 {
        (self.size as f64 * (1.0 - 2.0 * self.padding_ratio)) as u32
    }

    /// Horizontal and vertical offset of the safe zone from the canvas origin.
    pub fn offset(&self) -> u32 {
        (self.size as f64 * self.padding_ratio) as u32
    }

    /// Reject degenerate parameters before any I/O happens.
    ///
    /// A padding ratio at or above 0.5 leaves a zero-or-negative safe zone and
    /// is rejected explicitly rather than producing an empty canvas.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::ZeroSize { size: self.size });
        }
        if !(0.0..0.5).contains(&self.padding_ratio) {
            return Err(Error::InvalidPaddingRatio {
                ratio: self.padding_ratio,
            });
        }
        // Small sizes with a ratio just under 0.5 can still round down to zero
        if self.safe_zone_size() == 0 {
            return Err(Error::InvalidPaddingRatio {
                ratio: self.padding_ratio,
            });
        }
        Ok(())
    }

    /// Load parameters from a JSON preset file. Missing fields fall back to
    /// their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
