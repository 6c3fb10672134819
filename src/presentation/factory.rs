//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use std::sync::Arc;

use crate::application::{BuildUseCase, CheckUseCase};
use crate::config::{Config, PackagerConfig};
use crate::domain::ports::BuildEventSink;
use crate::infrastructure::{CommandPackager, ConsoleEventSink, JsonEventSink, LocalFs};

/// Build use case over the local disk and the configured packager
pub type ConcreteBuildUseCase = BuildUseCase<LocalFs, CommandPackager>;

/// Packager command configured from `[packager]`.
///
/// With `json` the child's stdout is discarded so ours stays a clean event
/// stream.
pub fn create_packager(config: &PackagerConfig, json: bool) -> CommandPackager {
    let mut packager = CommandPackager::new(config.program.clone())
        .with_args(config.args.clone())
        .forward_stdout(!json);
    if let Some(script) = &config.script {
        packager = packager.with_script(script.clone());
    }
    packager
}

pub fn create_build_use_case(config: &Config, json: bool) -> ConcreteBuildUseCase {
    BuildUseCase::new(LocalFs::new(), create_packager(&config.packager, json))
}

pub fn create_check_use_case() -> CheckUseCase<LocalFs> {
    CheckUseCase::new(LocalFs::new())
}

/// Event sink matching the output mode
pub fn create_event_sink(json: bool, verbose: u8) -> Arc<dyn BuildEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(verbose))
    }
}
