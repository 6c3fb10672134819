//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, in-memory mock for tests)
//! - `packager/` - External packager process
//! - `events/` - Build event sinks (console, NDJSON)

pub mod events;
pub mod fs;
pub mod packager;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use packager::CommandPackager;
