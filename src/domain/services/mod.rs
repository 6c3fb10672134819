//! Domain Services
//!
//! Stateless transformations used by the pipeline stages. None of them
//! touch the file system except through the paths they are handed.

pub mod js_minifier;
pub mod manifest_editor;
pub mod stylesheet;

pub use js_minifier::{minify_js, MinifyError, SourceKind};
pub use manifest_editor::{
    parse_manifest, render_manifest, rewrite_manifest, ManifestError, STRIPPED_FIELDS,
};
pub use stylesheet::{compile_compressed, StylesheetError};
