#![doc = r#"
ADICON — an Android adaptive icon post-processor.

This crate turns a single application icon into the two raster assets an
Android build expects: a padded adaptive-icon *foreground* (the source resized
into the centered safe zone of a transparent canvas) and a *monochrome*
silhouette (every visible pixel remapped to opaque white at its original
alpha) for themed icon packs. It powers the ADICON CLI and can be embedded in
your own build tooling.

Quick start: generate both assets next to the source
----------------------------------------------------
```rust,no_run
use std::path::Path;
use adicon::{IconParams, generate_icon_set};

fn main() -> adicon::Result<()> {
    let report = generate_icon_set(
        Path::new("assets/images/icon.png"),
        Path::new("assets/images"),
        &IconParams::default(),
    )?;
    println!("generated={} errors={}", report.generated, report.errors);
    Ok(())
}
```

Single variants and in-memory processing
----------------------------------------
```rust,no_run
use std::path::Path;
use adicon::{IconParams, ResizeFilter, adaptive_icon_to_buffer, generate_monochrome_icon};

fn main() -> adicon::Result<()> {
    let params = IconParams {
        size: 432,
        padding_ratio: 0.25,
        filter: ResizeFilter::Lanczos,
    };

    // File to file
    generate_monochrome_icon(
        Path::new("assets/images/icon.png"),
        Path::new("out/android-icon-monochrome.png"),
        &params,
    )?;

    // File to buffer (an `image::RgbaImage` you can post-process further)
    let foreground = adaptive_icon_to_buffer(Path::new("assets/images/icon.png"), &params)?;
    assert_eq!(foreground.dimensions(), (432, 432));
    Ok(())
}
```

Error handling
--------------
All public functions return `adicon::Result<T>`; match on `adicon::Error` to
handle specific cases, e.g. a missing source or a rejected padding ratio.

```rust,no_run
use std::path::Path;
use adicon::{Error, IconParams, generate_adaptive_icon};

fn main() {
    let params = IconParams::default();
    match generate_adaptive_icon(
        Path::new("/bad/path.png"),
        Path::new("/out/android-icon-foreground.png"),
        &params,
    ) {
        Ok(()) => {}
        Err(Error::MissingSource { path }) => eprintln!("no source icon at {path:?}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — icon parameters and the pure adaptive/monochrome transforms.
- [`io`] — raster reader and PNG writer.
- [`types`] — shared enums (`IconVariant`, `ResizeFilter`).
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{DEFAULT_ICON_SIZE, DEFAULT_PADDING_RATIO, IconParams};
pub use error::{Error, Result};
pub use types::{IconVariant, ResizeFilter};

// Readers and writers
pub use io::reader::load_rgba;
pub use io::writers::png::write_rgba_png;

// High-level API re-exports
pub use api::{
    FOREGROUND_FILENAME, IconSetReport, MONOCHROME_FILENAME, adaptive_icon_to_buffer,
    generate_adaptive_icon, generate_icon_set, generate_monochrome_icon,
    monochrome_icon_to_buffer,
};
