//! autocrop CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, crop the one
//! image and print a single outcome line. For programmatic use, prefer the
//! library API (`autocrop::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
