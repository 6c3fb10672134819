//! Packager Implementations
//!
//! Concrete implementations of the Packager port.

mod command;

pub use command::CommandPackager;
