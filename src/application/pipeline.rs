//! Build Use Case
//!
//! Orchestrates the package assembly:
//! 1. Compile: run the packager into the distribution root
//! 2. Minify: compress the bundles, drop intermediates
//! 3. Manifest: point `package.json` at the minified bundles
//! 4. Assets: copy the stylesheet (plus compressed variant) and images
//!
//! Stages run strictly in order. The first failure halts the run; nothing
//! already written is rolled back.

use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{BuildEvent, BuildEventSink, FileSystem, NoopEventSink, Packager};
use crate::domain::value_objects::{DistLayout, PipelineState, Stage};
use crate::error::{DistpackResult, StageError};

use super::report::{BuildReport, StageOutput};
use super::stages::{run_assets, run_compile, run_manifest, run_minify};

/// Build use case, parameterized by its ports
pub struct BuildUseCase<FS, P>
where
    FS: FileSystem,
    P: Packager,
{
    file_system: FS,
    packager: P,
}

impl<FS, P> BuildUseCase<FS, P>
where
    FS: FileSystem,
    P: Packager,
{
    pub fn new(file_system: FS, packager: P) -> Self {
        Self {
            file_system,
            packager,
        }
    }

    /// Run the build silently
    pub fn execute(&self, config: &Config, project_root: &Path) -> Result<BuildReport, StageError> {
        self.execute_with_events(config, project_root, Arc::new(NoopEventSink))
    }

    /// Run the build, reporting progress to `events`
    pub fn execute_with_events(
        &self,
        config: &Config,
        project_root: &Path,
        events: Arc<dyn BuildEventSink>,
    ) -> Result<BuildReport, StageError> {
        let layout = config.dist_layout(project_root);
        events.on_event(BuildEvent::Started {
            project_root: project_root.to_path_buf(),
            dist_root: layout.root().to_path_buf(),
        });

        let mut state = PipelineState::Init;
        let mut output = StageOutput::default();

        while let Some(next) = state.advance() {
            state = next;
            let Some(stage) = state.stage() else {
                break;
            };

            tracing::debug!(?state, "entering stage");
            events.on_event(BuildEvent::StageStarted { stage });

            match self.run_stage(stage, config, project_root, &layout, events.as_ref()) {
                Ok(stage_output) => {
                    output.merge(stage_output);
                    events.on_event(BuildEvent::StageCompleted { stage });
                }
                Err(error) => {
                    state = state.fail();
                    tracing::error!(?state, "{}", error);
                    events.on_event(BuildEvent::Failed {
                        stage,
                        error: error.to_string(),
                    });
                    return Err(StageError::new(stage, error));
                }
            }
        }

        debug_assert_eq!(state, PipelineState::Done);

        let report = BuildReport::collect(&self.file_system, layout.root(), output).map_err(
            |error| {
                events.on_event(BuildEvent::Failed {
                    stage: Stage::Assets,
                    error: error.to_string(),
                });
                StageError::new(Stage::Assets, error)
            },
        )?;

        events.on_event(BuildEvent::Completed {
            written_count: report.files.len(),
            removed_count: report.removed.len(),
            warning_count: report.warnings.len(),
        });
        tracing::info!(files = report.files.len(), "build complete");

        Ok(report)
    }

    fn run_stage(
        &self,
        stage: Stage,
        config: &Config,
        project_root: &Path,
        layout: &DistLayout,
        events: &dyn BuildEventSink,
    ) -> DistpackResult<StageOutput> {
        let fs = &self.file_system;
        match stage {
            Stage::Compile => run_compile(&self.packager, config, project_root),
            Stage::Minify => run_minify(fs, layout, config.minify.legacy_bundle, events),
            Stage::Manifest => run_manifest(fs, layout, events),
            Stage::Assets => run_assets(fs, config, project_root, layout, events),
        }
    }
}
