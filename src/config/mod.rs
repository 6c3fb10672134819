//! Configuration module for distpack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DISTPACK_*)
//! 3. Project config (distpack.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides, with_env_overrides_from, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{
    Config, DistConfig, MinifyConfig, PackagerConfig, ProjectConfig, StylesheetConfig,
};
