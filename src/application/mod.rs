//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (services, ports, value objects)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - Runs compile, minify, manifest rewrite and asset copy
//! - `CheckUseCase` - Verifies build inputs without building

pub mod check;
pub mod fan_out;
pub mod pipeline;
pub mod report;
pub mod stages;

pub use check::{CheckItem, CheckResult, CheckStatus, CheckUseCase};
pub use fan_out::{both, fan_out, Task};
pub use pipeline::BuildUseCase;
pub use report::{BuildReport, ReportedFile, StageOutput};
