//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use crate::domain::ports::{BuildEvent, BuildEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        let json = match event {
            BuildEvent::Started {
                project_root,
                dist_root,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "build",
                    "project": project_root.display().to_string(),
                    "dist": dist_root.display().to_string(),
                })
            }

            BuildEvent::StageStarted { stage } => {
                serde_json::json!({
                    "event": "stage_start",
                    "command": "build",
                    "stage": stage.as_str(),
                })
            }

            BuildEvent::StageCompleted { stage } => {
                serde_json::json!({
                    "event": "stage_complete",
                    "command": "build",
                    "stage": stage.as_str(),
                })
            }

            BuildEvent::FileWritten { stage, path } => {
                serde_json::json!({
                    "event": "file_written",
                    "command": "build",
                    "stage": stage.as_str(),
                    "path": path.display().to_string(),
                })
            }

            BuildEvent::FileRemoved { stage, path } => {
                serde_json::json!({
                    "event": "file_removed",
                    "command": "build",
                    "stage": stage.as_str(),
                    "path": path.display().to_string(),
                })
            }

            BuildEvent::Warning { stage, message } => {
                serde_json::json!({
                    "event": "warning",
                    "command": "build",
                    "stage": stage.as_str(),
                    "message": message,
                })
            }

            BuildEvent::Failed { stage, error } => {
                serde_json::json!({
                    "event": "error",
                    "command": "build",
                    "stage": stage.as_str(),
                    "error": error,
                })
            }

            BuildEvent::Completed {
                written_count,
                removed_count,
                warning_count,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "build",
                    "status": "success",
                    "written": written_count,
                    "removed": removed_count,
                    "warnings": warning_count,
                })
            }
        };

        self.write_event(json);
    }
}
