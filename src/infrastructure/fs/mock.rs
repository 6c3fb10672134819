//! In-memory file system for unit tests
//!
//! Uses `Arc<Mutex<>>` internally so it can be cloned and shared.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use sha2::{Digest, Sha256};

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: Arc<Mutex<BTreeMap<PathBuf, Vec<u8>>>>,
    pub dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl AsRef<[u8]>) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.as_ref().to_vec());
        self
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.dirs.lock().unwrap().insert(path.into());
        self
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}

impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        let files = self.files.lock().unwrap();
        files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let mut files = self.files.lock().unwrap();
        files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> FsResult<()> {
        let content = self.read(from)?;
        self.write(to, &content)
    }

    fn exists(&self, path: &Path) -> bool {
        let is_file = self.files.lock().unwrap().contains_key(path);
        is_file || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let under_file = {
            let files = self.files.lock().unwrap();
            files.keys().any(|p| p != path && p.starts_with(path))
        };
        under_file || self.dirs.lock().unwrap().iter().any(|d| d.starts_with(path))
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        let mut files = self.files.lock().unwrap();
        files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn list_files(&self, root: &Path) -> FsResult<Vec<PathBuf>> {
        if !self.is_dir(root) {
            return Err(FsError::NotFound(root.to_path_buf()));
        }
        let files = self.files.lock().unwrap();
        Ok(files
            .keys()
            .filter_map(|p| p.strip_prefix(root).ok())
            .filter(|rel| {
                !rel.components()
                    .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
            })
            .map(Path::to_path_buf)
            .collect())
    }

    fn list_dirs(&self, root: &Path) -> FsResult<Vec<PathBuf>> {
        if !self.is_dir(root) {
            return Err(FsError::NotFound(root.to_path_buf()));
        }
        let mut found = BTreeSet::new();
        let files: Vec<PathBuf> = self.files.lock().unwrap().keys().cloned().collect();
        let file_parents = files.iter().filter_map(|p| p.parent());
        let dirs: Vec<PathBuf> = self.dirs.lock().unwrap().iter().cloned().collect();
        for dir in dirs.iter().map(PathBuf::as_path).chain(file_parents) {
            for ancestor in dir.ancestors() {
                let Ok(rel) = ancestor.strip_prefix(root) else {
                    break;
                };
                if rel.as_os_str().is_empty() {
                    break;
                }
                if !rel
                    .components()
                    .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
                {
                    found.insert(rel.to_path_buf());
                }
            }
        }
        Ok(found.into_iter().collect())
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn hash(&self, path: &Path) -> FsResult<String> {
        let content = self.read(path)?;
        let mut hasher = Sha256::new();
        hasher.update(&content);
        Ok(format!("sha256:{:x}", hasher.finalize()))
    }
}
