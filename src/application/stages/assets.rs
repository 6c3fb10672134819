//! Asset copy stage: stylesheet copy + compressed variant, image tree.

use std::path::{Path, PathBuf};

use crate::application::fan_out::{both, fan_out, Task};
use crate::application::report::StageOutput;
use crate::config::Config;
use crate::domain::ports::{BuildEventSink, FileSystem};
use crate::domain::services::compile_compressed;
use crate::domain::value_objects::{DistLayout, Stage};
use crate::error::{DistpackError, DistpackResult};

use super::report_written;

/// Copy the stylesheet and the image tree concurrently.
pub fn run_assets<FS: FileSystem>(
    fs: &FS,
    config: &Config,
    project_root: &Path,
    layout: &DistLayout,
    events: &dyn BuildEventSink,
) -> DistpackResult<StageOutput> {
    let stylesheet = config.resolve(project_root, &config.project.stylesheet);
    let load_paths: Vec<PathBuf> = config
        .stylesheet
        .load_paths
        .iter()
        .map(|p| config.resolve(project_root, p))
        .collect();
    let images_root = config.resolve(project_root, &config.project.images);

    let (styles, images) = both(
        || copy_stylesheet(fs, &stylesheet, &load_paths, layout, events),
        || copy_images(fs, &images_root, &layout.images(), events),
    )?;

    Ok(StageOutput::merged([styles, images]))
}

/// Verbatim copy for runtime resolution, compressed CSS for demos.
fn copy_stylesheet<FS: FileSystem>(
    fs: &FS,
    source: &Path,
    load_paths: &[PathBuf],
    layout: &DistLayout,
    events: &dyn BuildEventSink,
) -> DistpackResult<StageOutput> {
    let tasks: Vec<Task<'_, StageOutput>> = vec![
        Box::new(move || {
            let target = layout.stylesheet_copy();
            fs.copy(source, &target)?;
            report_written(events, Stage::Assets, &target);
            Ok(StageOutput::written(target))
        }),
        Box::new(move || {
            let target = layout.stylesheet_min();
            let scss = fs.read_to_string(source)?;
            let css = compile_compressed(&scss, source, load_paths).map_err(|e| {
                DistpackError::Stylesheet {
                    file: source.to_path_buf(),
                    message: e.message,
                }
            })?;
            fs.write(&target, css.as_bytes())?;
            report_written(events, Stage::Assets, &target);
            Ok(StageOutput::written(target))
        }),
    ];

    Ok(StageOutput::merged(fan_out(tasks)?))
}

/// Mirror the image tree, skipping hidden entries. Directories are
/// recreated even when empty.
fn copy_images<FS: FileSystem>(
    fs: &FS,
    source_root: &Path,
    target_root: &Path,
    events: &dyn BuildEventSink,
) -> DistpackResult<StageOutput> {
    let mut output = StageOutput::default();

    if !fs.is_dir(source_root) {
        output.warn(
            Stage::Assets,
            format!(
                "image directory {} not found; no images copied",
                source_root.display()
            ),
            events,
        );
        return Ok(output);
    }

    fs.create_dir_all(target_root)?;
    for relative in fs.list_dirs(source_root)? {
        fs.create_dir_all(&target_root.join(relative))?;
    }

    for relative in fs.list_files(source_root)? {
        let target = target_root.join(&relative);
        fs.copy(&source_root.join(&relative), &target)?;
        report_written(events, Stage::Assets, &target);
        output.written.push(target);
    }

    tracing::info!(count = output.written.len(), "copied images");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::NoopEventSink;
    use crate::infrastructure::fs::MockFileSystem;

    const SCSS: &str = ".ionic-selectable {\n    .icon { width: 16px; }\n}\n";

    fn config() -> Config {
        let mut config = Config::default();
        config.project.stylesheet = PathBuf::from("src/select.scss");
        config
    }

    fn layout() -> DistLayout {
        DistLayout::new("/p/dist", "lib", "select.component", "images")
    }

    #[test]
    fn stylesheet_is_copied_and_compiled() {
        let fs = MockFileSystem::new().with_file("/p/src/select.scss", SCSS);

        let output =
            run_assets(&fs, &config(), Path::new("/p"), &layout(), &NoopEventSink).unwrap();

        assert_eq!(
            fs.contents("/p/dist/esm5/select.component.scss").as_deref(),
            Some(SCSS)
        );
        let css = fs.contents("/p/dist/esm5/select.component.min.css").unwrap();
        assert_eq!(css.trim_end(), ".ionic-selectable .icon{width:16px}");
        // No images directory: warning only
        assert_eq!(output.written.len(), 2);
        assert_eq!(output.warnings.len(), 1);
    }

    #[test]
    fn image_tree_is_mirrored() {
        let fs = MockFileSystem::new()
            .with_file("/p/src/select.scss", SCSS)
            .with_file("/p/images/logo.png", [0x89u8, 0x50, 0x4e, 0x47])
            .with_file("/p/images/icons/check.svg", "<svg/>")
            .with_file("/p/images/.gitkeep", "");

        let output =
            run_assets(&fs, &config(), Path::new("/p"), &layout(), &NoopEventSink).unwrap();

        assert!(output.warnings.is_empty());
        assert_eq!(
            fs.contents("/p/dist/images/icons/check.svg").as_deref(),
            Some("<svg/>")
        );
        assert!(fs.exists(Path::new("/p/dist/images/logo.png")));
        assert!(!fs.exists(Path::new("/p/dist/images/.gitkeep")));
        assert_eq!(output.written.len(), 4);
    }

    #[test]
    fn empty_image_dirs_are_recreated() {
        let fs = MockFileSystem::new()
            .with_file("/p/src/select.scss", SCSS)
            .with_file("/p/images/logo.png", [0x89u8, 0x50])
            .with_dir("/p/images/empty")
            .with_dir("/p/images/.cache");

        let output =
            run_assets(&fs, &config(), Path::new("/p"), &layout(), &NoopEventSink).unwrap();

        assert!(fs.is_dir(Path::new("/p/dist/images/empty")));
        assert!(!fs.exists(Path::new("/p/dist/images/.cache")));
        // Directories are not reported as written files
        assert_eq!(output.written.len(), 3);
    }

    #[test]
    fn invalid_stylesheet_fails_stage() {
        let fs = MockFileSystem::new().with_file("/p/src/select.scss", ".a { color: $missing; }");

        let err = run_assets(&fs, &config(), Path::new("/p"), &layout(), &NoopEventSink)
            .unwrap_err();

        assert!(matches!(err, DistpackError::Stylesheet { .. }));
    }

    #[test]
    fn missing_stylesheet_is_fs_error() {
        let fs = MockFileSystem::new();

        let err = run_assets(&fs, &config(), Path::new("/p"), &layout(), &NoopEventSink)
            .unwrap_err();

        assert!(matches!(err, DistpackError::Fs(_)));
    }
}
