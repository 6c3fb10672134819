//! Packager port
//!
//! The packager compiles the library sources into one bundle per module
//! format plus the package manifest. It is an external tool; this trait is
//! the seam between the compile stage and the process that runs it.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Inputs handed to the packager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequest {
    /// Working directory of the packager
    pub project_root: PathBuf,
    /// Packaging configuration (`ng-package.json`)
    pub project_descriptor: PathBuf,
    /// Compiler settings (`tsconfig.dist.json`)
    pub tsconfig: PathBuf,
}

impl PackageRequest {
    pub fn new(
        project_root: impl Into<PathBuf>,
        project_descriptor: impl Into<PathBuf>,
        tsconfig: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            project_descriptor: project_descriptor.into(),
            tsconfig: tsconfig.into(),
        }
    }
}

/// Packager failures. All of them are fatal for the build.
#[derive(Error, Debug)]
pub enum PackagerError {
    /// A required input does not exist
    #[error("missing input {}", .0.display())]
    MissingInput(PathBuf),

    /// The packager process could not be started
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The packager ran and reported failure
    #[error("'{program}' exited with {}{}", describe_code(.code), describe_stderr(.stderr))]
    Exited {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

fn describe_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(":\n{}", trimmed)
    }
}

/// Builds the library bundles
pub trait Packager: Send + Sync {
    /// Tool name for logs and events
    fn name(&self) -> &str;

    /// Run the packager to completion
    fn package(&self, request: &PackageRequest) -> Result<(), PackagerError>;
}

/// Check that the request's inputs exist before handing them to a packager.
pub fn ensure_inputs(request: &PackageRequest) -> Result<(), PackagerError> {
    for input in [&request.project_descriptor, &request.tsconfig] {
        if !resolve(&request.project_root, input).exists() {
            return Err(PackagerError::MissingInput(input.clone()));
        }
    }
    Ok(())
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
