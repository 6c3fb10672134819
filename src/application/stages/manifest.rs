//! Manifest rewrite stage.

use crate::application::report::StageOutput;
use crate::domain::ports::{BuildEventSink, FileSystem};
use crate::domain::services::{parse_manifest, render_manifest, rewrite_manifest, ManifestError};
use crate::domain::value_objects::{DistLayout, Stage};
use crate::error::{DistpackError, DistpackResult};

use super::report_written;

/// Rewrite `package.json` in the distribution root in place.
pub fn run_manifest<FS: FileSystem>(
    fs: &FS,
    layout: &DistLayout,
    events: &dyn BuildEventSink,
) -> DistpackResult<StageOutput> {
    let path = layout.manifest();
    let text = fs.read_to_string(&path)?;

    let mut manifest = parse_manifest(&text).map_err(|e| match e {
        ManifestError::NotAnObject => DistpackError::ManifestShape { file: path.clone() },
        ManifestError::Parse(message) => DistpackError::Manifest {
            file: path.clone(),
            message,
        },
    })?;

    rewrite_manifest(&mut manifest, layout);
    fs.write(&path, render_manifest(&manifest).as_bytes())?;
    report_written(events, Stage::Manifest, &path);

    Ok(StageOutput::written(path))
}
