use clap::Parser;
use std::path::PathBuf;

use adicon::types::{IconVariant, ResizeFilter};

#[derive(Parser)]
#[command(name = "adicon", version, about = "ADICON CLI")]
pub struct CliArgs {
    /// Source icon image (defaults to assets/images/icon.png)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory for generated icons (defaults to the source's directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Output edge length in pixels (default 1080)
    #[arg(long)]
    pub size: Option<u32>,

    /// Per-side padding as a fraction of the edge; 0.25 reserves 25% on each side
    #[arg(long)]
    pub padding_ratio: Option<f64>,

    /// Resampling algorithm (nearest, bilinear, cubic, lanczos)
    #[arg(long, value_enum)]
    pub filter: Option<ResizeFilter>,

    /// Which icon variants to generate
    #[arg(long, value_enum, default_value_t = IconVariant::All)]
    pub variant: IconVariant,

    /// JSON preset with icon parameters; explicit flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
