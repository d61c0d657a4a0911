//! Command Line Interface (CLI) layer for ADICON.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for generating the Android icon
//! assets. It wires user-provided options to the underlying library
//! functionality exposed via `adicon::api`.
//!
//! If you are embedding ADICON into another application, prefer using
//! the high-level `adicon::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
