//! distpack - package assembler for the areo-ionic-selectable distribution
//!
//! Drives the external packager, then turns its output into a publishable
//! tree: minified bundles, a manifest pointing at them, and the component's
//! stylesheet and images.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildReport, BuildUseCase, CheckResult, CheckUseCase};
pub use config::Config;
pub use domain::value_objects::{DistLayout, LegacyBundlePolicy, ModuleFormat, Stage};
pub use error::{DistpackError, DistpackResult, StageError};
