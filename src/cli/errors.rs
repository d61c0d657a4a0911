use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Source icon not found: {path:?}")]
    SourceNotFound { path: PathBuf },

    #[error("{failed} of {attempted} icon variants failed; rerun with --log for details")]
    PartialFailure { failed: usize, attempted: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
