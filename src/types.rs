//! Shared types and enums used across ADICON.
//! Includes the icon variant selector (`IconVariant`) and the resampling
//! filter (`ResizeFilter`).
use clap::ValueEnum;
use fast_image_resize::{FilterType, ResizeAlg};
use serde::{Deserialize, Serialize};

/// Which Android icon assets a run produces.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconVariant {
    All,
    Foreground,
    Monochrome,
}

impl std::fmt::Display for IconVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IconVariant::All => "All",
            IconVariant::Foreground => "Foreground",
            IconVariant::Monochrome => "Monochrome",
        };
        write!(f, "{}", s)
    }
}

/// Resampling filter applied to every scaling step (nearest, bilinear, cubic, lanczos).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeFilter {
    Nearest,
    Bilinear,
    Cubic,
    Lanczos,
}

impl ResizeFilter {
    pub fn to_resize_alg(self) -> ResizeAlg {
        match self {
            ResizeFilter::Nearest => ResizeAlg::Nearest,
            ResizeFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
            ResizeFilter::Cubic => ResizeAlg::Convolution(FilterType::CatmullRom),
            ResizeFilter::Lanczos => ResizeAlg::Convolution(FilterType::Lanczos3),
        }
    }
}

impl std::fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResizeFilter::Nearest => "Nearest",
            ResizeFilter::Bilinear => "Bilinear",
            ResizeFilter::Cubic => "Cubic",
            ResizeFilter::Lanczos => "Lanczos",
        };
        write!(f, "{}", s)
    }
}
