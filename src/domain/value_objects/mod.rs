//! Domain Value Objects
//!
//! Immutable value types that describe the distribution being assembled.

mod layout;
mod legacy_bundle;
mod stage;

pub use layout::{BundlePaths, DistLayout, ModuleFormat};
pub use legacy_bundle::LegacyBundlePolicy;
pub use stage::{PipelineState, Stage};
