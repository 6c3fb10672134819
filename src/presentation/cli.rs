//! CLI Argument Parsing
//!
//! Global flags (--project, --config, --json, --verbose) are inherited by all
//! subcommands. Running `distpack` with no subcommand builds.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// distpack - assemble the component library distribution
#[derive(Parser, Debug)]
#[command(name = "distpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root
    #[arg(short = 'C', long = "project", global = true, default_value = ".")]
    pub project: PathBuf,

    /// Config file (default: <project>/distpack.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Compile, minify, rewrite the manifest and copy assets (default)
    Build,

    /// Verify build inputs without running the packager
    Check,
}

impl Cli {
    /// Subcommand to run, `build` when none was given
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_build() {
        let cli = Cli::try_parse_from(["distpack"]).unwrap();
        assert_eq!(cli.command(), Commands::Build);
        assert_eq!(cli.project, PathBuf::from("."));
        assert!(!cli.json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["distpack", "check", "-C", "lib", "--json", "-vv"]).unwrap();
        assert_eq!(cli.command(), Commands::Check);
        assert_eq!(cli.project, PathBuf::from("lib"));
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn explicit_config_path() {
        let cli = Cli::try_parse_from(["distpack", "--config", "ci/distpack.toml", "build"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("ci/distpack.toml")));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["distpack", "publish"]).is_err());
    }
}
