//! Clipboard module for clipmock
//!
//! Provides the in-memory clipboard provider:
//! - Register names and alias normalization
//! - Paste-mode tags (`v`, `V`, Ctrl-V block)
//! - The register table and the `clipboard` capability

mod provider;
mod register;
mod regtype;
mod store;

pub use provider::{Capability, ClipboardMock, ClipboardProvider, Plugin};
pub use register::Register;
pub use regtype::RegType;
pub use store::{ClipboardStore, RegisterContents, SEEDED_REGISTERS};
