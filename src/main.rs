//! distpack CLI - package assembler for the component library distribution
//!
//! Usage: distpack [COMMAND]
//!
//! Commands:
//!   build   Compile, minify, rewrite the manifest and copy assets (default)
//!   check   Verify build inputs without running the packager

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use distpack::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command() {
        Commands::Build => commands::build::cmd_build(&cli),
        Commands::Check => commands::check::cmd_check(&cli),
    }
}

/// Diagnostics go to stderr; `DISTPACK_LOG` (or `RUST_LOG`) overrides `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_env("DISTPACK_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
