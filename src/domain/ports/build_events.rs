//! Build Event Port
//!
//! Provides an observable interface for pipeline runs.
//! Enables console progress, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::value_objects::Stage;

/// Event emitted during a build
#[derive(Debug, Clone, PartialEq)]
pub enum BuildEvent {
    /// Build started
    Started { project_root: PathBuf, dist_root: PathBuf },

    /// A stage started
    StageStarted { stage: Stage },

    /// A stage finished successfully
    StageCompleted { stage: Stage },

    /// A file was written
    FileWritten { stage: Stage, path: PathBuf },

    /// An intermediate file was removed
    FileRemoved { stage: Stage, path: PathBuf },

    /// Non-fatal problem
    Warning { stage: Stage, message: String },

    /// A stage failed; the build halts
    Failed { stage: Stage, error: String },

    /// Build completed
    Completed {
        written_count: usize,
        removed_count: usize,
        warning_count: usize,
    },
}

/// Trait for receiving build events
///
/// Implementations:
/// - ConsoleEventSink: progress lines in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait BuildEventSink: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);

    /// Check if this sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
