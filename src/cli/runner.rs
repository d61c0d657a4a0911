use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use adicon::api::{
    FOREGROUND_FILENAME, MONOCHROME_FILENAME, generate_adaptive_icon, generate_icon_set,
    generate_monochrome_icon,
};
use adicon::types::IconVariant;
use adicon::IconParams;

use super::args::CliArgs;
use super::errors::AppError;

/// Default source asset, resolved relative to the working directory.
const DEFAULT_SOURCE: &str = "assets/images/icon.png";

fn resolve_params(args: &CliArgs) -> Result<IconParams, Box<dyn std::error::Error>> {
    let mut params = match &args.config {
        Some(path) => IconParams::from_json_file(path)?,
        None => IconParams::default(),
    };

    if let Some(size) = args.size {
        params.size = size;
    }
    if let Some(ratio) = args.padding_ratio {
        params.padding_ratio = ratio;
    }
    if let Some(filter) = args.filter {
        params.filter = filter;
    }

    params.validate()?;
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = resolve_params(&args)?;

    let source = args
        .input
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE));
    if !source.exists() {
        return Err(AppError::SourceNotFound { path: source }.into());
    }

    let output_dir = match args.output_dir.clone() {
        Some(dir) => dir,
        None => source
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    fs::create_dir_all(&output_dir)?;

    info!("Source: {:?}", source);
    info!("Output directory: {:?}", output_dir);

    match args.variant {
        IconVariant::All => {
            println!("Generating Android adaptive icons...");
            println!("{}", "=".repeat(50));

            let report = generate_icon_set(&source, &output_dir, &params)?;
            for output in &report.outputs {
                println!("✓ Created: {}", output.display());
            }
            println!("  Size: {}x{}", params.size, params.size);
            println!(
                "  Safe zone: {}x{}",
                params.safe_zone_size(),
                params.safe_zone_size()
            );
            println!("  Padding: {}px on each side", params.offset());

            if report.errors > 0 {
                return Err(AppError::PartialFailure {
                    failed: report.errors,
                    attempted: report.generated + report.errors,
                }
                .into());
            }

            println!();
            println!("{}", "=".repeat(50));
            println!("✓ Icon generation complete!");
            println!();
            println!("Next steps:");
            println!("1. Rebuild the app: eas build --platform android");
            println!("2. Test on Android device");
            println!("3. Check app drawer - icon should display correctly");
        }
        IconVariant::Foreground => {
            let output = output_dir.join(FOREGROUND_FILENAME);
            generate_adaptive_icon(&source, &output, &params)?;
            println!("✓ Created: {}", output.display());
        }
        IconVariant::Monochrome => {
            let output = output_dir.join(MONOCHROME_FILENAME);
            generate_monochrome_icon(&source, &output, &params)?;
            println!("✓ Created: {}", output.display());
        }
    }

    Ok(())
}
