//! FileSystem port - abstraction over file I/O operations
//!
//! Stages perform all file access through this trait so they can run
//! against the local disk or an in-memory mock.

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error on a path
    Io { path: PathBuf, source: std::io::Error },
    /// Other error
    Other(String),
}

impl FsError {
    /// Classify an I/O error raised while operating on `path`
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MockFileSystem` - in-memory for testing
///
/// Stages fan out across threads, so implementations must be `Send + Sync`.
pub trait FileSystem: Send + Sync {
    /// Read file content as bytes
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Read file content as UTF-8
    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes)
            .map_err(|e| FsError::Other(format!("{} is not UTF-8: {}", path.display(), e)))
    }

    /// Write content atomically, creating parent directories
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()>;

    /// Copy a file byte for byte, creating parent directories
    fn copy(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Files below `root`, relative to it and sorted.
    ///
    /// Hidden entries (names starting with `.`) are skipped, as is
    /// everything below a hidden directory.
    fn list_files(&self, root: &Path) -> FsResult<Vec<PathBuf>>;

    /// Directories below `root`, relative to it and sorted, with the same
    /// hidden-entry rule as `list_files`. Empty directories are included.
    fn list_dirs(&self, root: &Path) -> FsResult<Vec<PathBuf>>;

    /// Create a directory and any missing parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Compute content hash (`sha256:<hex>`)
    fn hash(&self, path: &Path) -> FsResult<String>;
}
