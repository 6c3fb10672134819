//! Build results
//!
//! `StageOutput` is what a single stage did; `BuildReport` is the merged,
//! hashed record of a whole run.

use std::path::{Path, PathBuf};

use crate::domain::ports::{BuildEvent, BuildEventSink, FileSystem};
use crate::domain::value_objects::Stage;
use crate::error::DistpackResult;

/// Files touched by one stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageOutput {
    pub written: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

impl StageOutput {
    pub fn written(path: PathBuf) -> Self {
        Self {
            written: vec![path],
            ..Self::default()
        }
    }

    /// Fold another output into this one
    pub fn merge(&mut self, other: StageOutput) {
        self.written.extend(other.written);
        self.removed.extend(other.removed);
        self.warnings.extend(other.warnings);
    }

    pub fn merged(outputs: impl IntoIterator<Item = StageOutput>) -> Self {
        let mut merged = StageOutput::default();
        for output in outputs {
            merged.merge(output);
        }
        merged
    }

    /// Record a warning and report it
    pub fn warn(&mut self, stage: Stage, message: String, events: &dyn BuildEventSink) {
        tracing::warn!(%stage, "{}", message);
        events.on_event(BuildEvent::Warning {
            stage,
            message: message.clone(),
        });
        self.warnings.push(message);
    }
}

/// A file present in the distribution after a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedFile {
    /// Path relative to the distribution root
    pub path: PathBuf,
    /// `sha256:<hex>` content hash
    pub hash: String,
}

/// Record of a successful build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Files written by distpack, sorted by path
    pub files: Vec<ReportedFile>,
    /// Intermediate files removed, relative to the distribution root
    pub removed: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

impl BuildReport {
    /// Hash every written file and normalise paths against `dist_root`
    pub fn collect<FS: FileSystem>(
        fs: &FS,
        dist_root: &Path,
        output: StageOutput,
    ) -> DistpackResult<Self> {
        let mut written = output.written;
        written.sort();
        written.dedup();

        let mut files = Vec::with_capacity(written.len());
        for path in written {
            let hash = fs.hash(&path)?;
            files.push(ReportedFile {
                path: relative_to(dist_root, &path),
                hash,
            });
        }

        let mut removed: Vec<PathBuf> = output
            .removed
            .iter()
            .map(|p| relative_to(dist_root, p))
            .collect();
        removed.sort();

        Ok(Self {
            files,
            removed,
            warnings: output.warnings,
        })
    }

    pub fn contains(&self, relative: impl AsRef<Path>) -> bool {
        self.files.iter().any(|f| f.path == relative.as_ref())
    }
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
