//! Stylesheet Compiler Service
//!
//! Sass source is compiled straight to compressed CSS with grass, producing
//! the variant shipped for demos. Hacks and non-standard selectors grass
//! accepts pass through untouched.

use std::path::{Path, PathBuf};

/// Error type for stylesheet compilation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetError {
    pub message: String,
}

impl std::fmt::Display for StylesheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StylesheetError {}

/// Compile Sass `source` into compressed CSS.
///
/// `source_path` is only used to resolve relative `@use`/`@import` rules;
/// its directory is searched first, then `load_paths` in order.
pub fn compile_compressed(
    source: &str,
    source_path: &Path,
    load_paths: &[PathBuf],
) -> Result<String, StylesheetError> {
    let mut options = grass::Options::default().style(grass::OutputStyle::Compressed);
    if let Some(parent) = source_path.parent() {
        options = options.load_path(parent);
    }
    for path in load_paths {
        options = options.load_path(path);
    }

    grass::from_string(source.to_string(), &options).map_err(|e| StylesheetError {
        message: e.to_string(),
    })
}
