//! Pipeline stages
//!
//! Each stage is a plain function over the ports it needs. Stages run
//! strictly in order; branches inside a stage fan out.

mod assets;
mod compile;
mod manifest;
mod minify;

pub use assets::run_assets;
pub use compile::run_compile;
pub use manifest::run_manifest;
pub use minify::run_minify;

use std::path::Path;

use crate::domain::ports::{BuildEvent, BuildEventSink};
use crate::domain::value_objects::Stage;

fn report_written(events: &dyn BuildEventSink, stage: Stage, path: &Path) {
    tracing::debug!(%stage, path = %path.display(), "wrote");
    if events.wants_detailed_events() {
        events.on_event(BuildEvent::FileWritten {
            stage,
            path: path.to_path_buf(),
        });
    }
}

fn report_removed(events: &dyn BuildEventSink, stage: Stage, path: &Path) {
    tracing::debug!(%stage, path = %path.display(), "removed");
    if events.wants_detailed_events() {
        events.on_event(BuildEvent::FileRemoved {
            stage,
            path: path.to_path_buf(),
        });
    }
}
