//! clipmock library - In-memory clipboard provider for editor test suites
//!
//! This library exposes the provider and host session so tests can drive
//! them without spawning the binary.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod host;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use clipboard::{ClipboardMock, ClipboardProvider, Register, RegType};
pub use config::Config;
pub use error::ClipmockError;
