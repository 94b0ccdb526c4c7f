//! SQMEAN CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, compute the
//! weighted average of squares, and exit with appropriate status.
//! For programmatic use, prefer the library API (`sqmean::api`).

use clap::Parser;

mod cli;

fn main() {
    let args = cli::CliArgs::parse();
    if let Err(e) = cli::run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
