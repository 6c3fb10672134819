//! Minify stage: compress the ES-module bundles, then drop intermediates.

use crate::application::fan_out::{fan_out, Task};
use crate::application::report::StageOutput;
use crate::domain::ports::{BuildEventSink, FileSystem};
use crate::domain::services::{minify_js, SourceKind};
use crate::domain::value_objects::{BundlePaths, DistLayout, LegacyBundlePolicy, ModuleFormat, Stage};
use crate::error::{DistpackError, DistpackResult};

use super::{report_removed, report_written};

/// Minify each bundle in parallel, then remove the UMD bundle, its map and
/// both unminified ES-module bundles.
///
/// Nothing is removed unless every branch succeeded. A failed removal aborts
/// the stage and leaves the remaining intermediates in place.
pub fn run_minify<FS: FileSystem>(
    fs: &FS,
    layout: &DistLayout,
    policy: LegacyBundlePolicy,
    events: &dyn BuildEventSink,
) -> DistpackResult<StageOutput> {
    let formats: &[ModuleFormat] = match policy {
        LegacyBundlePolicy::Packager => &[ModuleFormat::Esm5, ModuleFormat::Esm2015],
        LegacyBundlePolicy::Minify => &ModuleFormat::ALL,
    };

    let tasks: Vec<Task<'_, StageOutput>> = formats
        .iter()
        .map(|&format| {
            let bundle = layout.bundle(format);
            Box::new(move || minify_bundle(fs, &bundle, events)) as Task<'_, StageOutput>
        })
        .collect();

    let mut output = StageOutput::merged(fan_out(tasks)?);

    if policy == LegacyBundlePolicy::Packager {
        let umd_min = layout.bundle(ModuleFormat::Umd).min_file;
        if !fs.exists(&umd_min) {
            output.warn(
                Stage::Minify,
                format!(
                    "{} was not emitted by the packager; the manifest's main field will point at a missing file",
                    umd_min.display()
                ),
                events,
            );
        }
    }

    for path in layout.intermediates() {
        fs.remove(&path)?;
        report_removed(events, Stage::Minify, &path);
        output.removed.push(path);
    }

    Ok(output)
}

fn minify_bundle<FS: FileSystem>(
    fs: &FS,
    bundle: &BundlePaths,
    events: &dyn BuildEventSink,
) -> DistpackResult<StageOutput> {
    let source = fs.read_to_string(&bundle.file)?;
    let kind = if bundle.format.is_module() {
        SourceKind::Module
    } else {
        SourceKind::Script
    };

    let minified = minify_js(&source, kind).map_err(|e| DistpackError::Minify {
        file: bundle.file.clone(),
        message: e.message,
    })?;

    fs.write(&bundle.min_file, minified.as_bytes())?;
    tracing::info!(
        format = %bundle.format,
        from = source.len(),
        to = minified.len(),
        "minified bundle"
    );
    report_written(events, Stage::Minify, &bundle.min_file);

    Ok(StageOutput::written(bundle.min_file.clone()))
}
