//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Provides atomic writes and standard file operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }

    fn ensure_parent(path: &Path) -> FsResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(e, parent))
            }
            _ => Ok(()),
        }
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| FsError::from_io(e, path))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        Self::ensure_parent(path)?;

        // Write to a sibling temp file, then rename over the target
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut temp =
            tempfile::NamedTempFile::new_in(&dir).map_err(|e| FsError::from_io(e, &dir))?;
        temp.write_all(content)
            .and_then(|_| temp.flush())
            .map_err(|e| FsError::from_io(e, path))?;
        temp.persist(path)
            .map_err(|e| FsError::from_io(e.error, path))?;
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> FsResult<()> {
        Self::ensure_parent(to)?;
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| FsError::from_io(e, from))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        std::fs::remove_file(path).map_err(|e| FsError::from_io(e, path))
    }

    fn list_files(&self, root: &Path) -> FsResult<Vec<PathBuf>> {
        let mut tree = Tree::default();
        collect(root, root, &mut tree)?;
        tree.files.sort();
        Ok(tree.files)
    }

    fn list_dirs(&self, root: &Path) -> FsResult<Vec<PathBuf>> {
        let mut tree = Tree::default();
        collect(root, root, &mut tree)?;
        tree.dirs.sort();
        Ok(tree.dirs)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        std::fs::create_dir_all(path).map_err(|e| FsError::from_io(e, path))
    }

    fn hash(&self, path: &Path) -> FsResult<String> {
        let content = self.read(path)?;
        let mut hasher = Sha256::new();
        hasher.update(&content);
        Ok(format!("sha256:{:x}", hasher.finalize()))
    }
}

#[derive(Default)]
struct Tree {
    files: Vec<PathBuf>,
    dirs: Vec<PathBuf>,
}

fn collect(root: &Path, current: &Path, tree: &mut Tree) -> FsResult<()> {
    let entries = std::fs::read_dir(current).map_err(|e| FsError::from_io(e, current))?;
    for entry in entries {
        let entry = entry.map_err(|e| FsError::from_io(e, current))?;
        let path = entry.path();

        if is_hidden(&path) {
            continue;
        }

        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        if path.is_dir() {
            tree.dirs.push(relative.to_path_buf());
            collect(root, &path, tree)?;
        } else {
            tree.files.push(relative.to_path_buf());
        }
    }
    Ok(())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}
