//! Domain Layer
//!
//! Pure description of the distribution and the transformations applied
//! to it.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Stage, DistLayout, ModuleFormat)
//! - `services/` - Stateless transformations (minifier, stylesheet, manifest)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - file access goes through the `FileSystem` port
//! 2. **Ports & Adapters** - the packager and event sinks are trait-defined

pub mod ports;
pub mod services;
pub mod value_objects;
