pub mod build;
pub mod check;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use distpack::config::{Config, ConfigWarning};
use distpack::presentation::Cli;

/// Project root as an absolute path
pub(crate) fn resolve_project_root(project: &Path) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let root = cwd.join(project);
    anyhow::ensure!(root.is_dir(), "project root {} is not a directory", root.display());
    Ok(root)
}

/// Resolve the project root and load its configuration.
///
/// Unknown config keys are logged as warnings.
pub(crate) fn load_project(cli: &Cli) -> Result<(PathBuf, Config, Vec<ConfigWarning>)> {
    let project_root = resolve_project_root(&cli.project)?;
    let (config, warnings) = Config::load_for_project(&project_root, cli.config.as_deref())?;

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    Ok((project_root, config, warnings))
}
