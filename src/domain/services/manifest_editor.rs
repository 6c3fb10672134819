//! Manifest Editor Service
//!
//! Rewrites the packager-generated `package.json` for publishing: entry
//! points move to the minified bundles and fields that mean nothing to a
//! consumer of the published artifact are dropped. Key order is preserved.

use serde_json::{Map, Value};

use crate::domain::value_objects::{DistLayout, ModuleFormat};

/// Fields removed from the published manifest
pub const STRIPPED_FIELDS: [&str; 3] = ["cordova", "devDependencies", "dependencies"];

/// Error type for manifest failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    /// Not valid JSON
    Parse(String),
    /// Valid JSON, but not an object
    NotAnObject,
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::Parse(msg) => write!(f, "{}", msg),
            ManifestError::NotAnObject => write!(f, "manifest is not a JSON object"),
        }
    }
}

impl std::error::Error for ManifestError {}

/// Parse manifest text into an ordered JSON object
pub fn parse_manifest(text: &str) -> Result<Map<String, Value>, ManifestError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ManifestError::NotAnObject),
        Err(e) => Err(ManifestError::Parse(e.to_string())),
    }
}

/// Point entry fields at the minified bundles and strip unpublished fields.
///
/// Existing entry fields keep their position; missing ones are appended.
pub fn rewrite_manifest(manifest: &mut Map<String, Value>, layout: &DistLayout) {
    for format in ModuleFormat::ALL {
        manifest.insert(
            format.manifest_field().to_string(),
            Value::String(layout.entry_point(format)),
        );
    }
    for field in STRIPPED_FIELDS {
        manifest.shift_remove(field);
    }
}

/// Render the manifest with two-space indentation and a trailing newline
pub fn render_manifest(manifest: &Map<String, Value>) -> String {
    // A map of JSON values always serializes.
    let mut text = serde_json::to_string_pretty(manifest).unwrap_or_default();
    text.push('\n');
    text
}
