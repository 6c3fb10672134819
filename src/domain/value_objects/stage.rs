//! Pipeline stages and the linear state machine that sequences them.

use std::fmt;

/// One sequential phase of the build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Compile,
    Minify,
    Manifest,
    Assets,
}

impl Stage {
    /// All stages in execution order
    pub const ALL: [Stage; 4] = [Stage::Compile, Stage::Minify, Stage::Manifest, Stage::Assets];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Compile => "compile",
            Stage::Minify => "minify",
            Stage::Manifest => "manifest",
            Stage::Assets => "assets",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of a pipeline run
///
/// Transitions are strictly linear:
/// `Init -> Compiling -> Minifying -> RewritingManifest -> CopyingAssets -> Done`.
/// Any stage error moves straight to `Failed` and the run halts there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Init,
    Compiling,
    Minifying,
    RewritingManifest,
    CopyingAssets,
    Done,
    Failed(Stage),
}

impl PipelineState {
    /// Stage currently running, if any
    pub fn stage(&self) -> Option<Stage> {
        match self {
            PipelineState::Compiling => Some(Stage::Compile),
            PipelineState::Minifying => Some(Stage::Minify),
            PipelineState::RewritingManifest => Some(Stage::Manifest),
            PipelineState::CopyingAssets => Some(Stage::Assets),
            _ => None,
        }
    }

    /// Next state after the current stage succeeds.
    ///
    /// Terminal states have no successor.
    pub fn advance(self) -> Option<Self> {
        match self {
            PipelineState::Init => Some(PipelineState::Compiling),
            PipelineState::Compiling => Some(PipelineState::Minifying),
            PipelineState::Minifying => Some(PipelineState::RewritingManifest),
            PipelineState::RewritingManifest => Some(PipelineState::CopyingAssets),
            PipelineState::CopyingAssets => Some(PipelineState::Done),
            PipelineState::Done | PipelineState::Failed(_) => None,
        }
    }

    /// Transition taken when the running stage fails
    pub fn fail(self) -> Self {
        match self.stage() {
            Some(stage) => PipelineState::Failed(stage),
            None => self,
        }
    }
}
