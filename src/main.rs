//! ADICON CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, generate the
//! requested icon variants, and exit with appropriate status.
//! For programmatic use, prefer the library API (`adicon::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
