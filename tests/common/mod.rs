//! Common test utilities for distpack CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated temp project with a scripted fake packager
//! - Fixtures: Packager output and project inputs

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
