//! Error types for distpack
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FsError, PackagerError};
use crate::domain::value_objects::Stage;

/// Result type alias for distpack operations
pub type DistpackResult<T> = Result<T, DistpackError>;

/// Main error type for distpack operations
#[derive(Error, Debug)]
pub enum DistpackError {
    /// The external packager failed or could not be started
    #[error("packager failed: {0}")]
    Packager(#[from] PackagerError),

    /// A bundle could not be parsed or compressed
    #[error("failed to minify {file}: {message}")]
    Minify { file: PathBuf, message: String },

    /// The component stylesheet could not be compiled
    #[error("failed to compile stylesheet {file}: {message}")]
    Stylesheet { file: PathBuf, message: String },

    /// The generated manifest is not valid JSON
    #[error("invalid manifest {file}: {message}")]
    Manifest { file: PathBuf, message: String },

    /// The generated manifest is valid JSON but not an object
    #[error("manifest {file} must be a JSON object")]
    ManifestShape { file: PathBuf },

    /// Invalid distpack.toml
    #[error("invalid config {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// File system error
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DistpackError {
    /// Whether this error must terminate the process with status 1
    /// before any later stage runs.
    pub fn is_fatal_compile(&self) -> bool {
        matches!(self, DistpackError::Packager(_))
    }
}

/// A stage failure, carrying the stage that failed.
#[derive(Error, Debug)]
#[error("{stage} stage failed: {source}")]
pub struct StageError {
    pub stage: Stage,
    #[source]
    pub source: DistpackError,
}

impl StageError {
    pub fn new(stage: Stage, source: DistpackError) -> Self {
        Self { stage, source }
    }
}
