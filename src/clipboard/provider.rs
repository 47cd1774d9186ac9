use std::fmt;

use serde::Serialize;

use super::register::Register;
use super::regtype::RegType;
use super::store::{ClipboardStore, RegisterContents};
use crate::config::AliasPolicy;
use crate::error::ClipmockError;

/// Capability tags a plugin can advertise to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Clipboard,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Clipboard => f.write_str("clipboard"),
        }
    }
}

/// Anything the host can load and ask what it provides.
pub trait Plugin {
    fn name(&self) -> &str;
    fn provides(&self) -> &[Capability];
}

/// Operations the host routes to a `clipboard` provider.
pub trait ClipboardProvider: Plugin {
    fn get(&self, register: Register) -> Result<RegisterContents, ClipmockError>;
    fn set(&mut self, lines: Vec<String>, regtype: RegType, register: Register);
}

const CLIPBOARD_CAPABILITIES: &[Capability] = &[Capability::Clipboard];

/// In-memory clipboard provider.
#[derive(Debug, Clone, Default)]
pub struct ClipboardMock {
    store: ClipboardStore,
    alias: AliasPolicy,
}

impl ClipboardMock {
    pub fn new(alias: AliasPolicy) -> Self {
        Self {
            store: ClipboardStore::new(),
            alias,
        }
    }

    pub fn store(&self) -> &ClipboardStore {
        &self.store
    }
}

impl Plugin for ClipboardMock {
    fn name(&self) -> &str {
        "clipboard-mock"
    }

    fn provides(&self) -> &[Capability] {
        CLIPBOARD_CAPABILITIES
    }
}

impl ClipboardProvider for ClipboardMock {
    fn get(&self, register: Register) -> Result<RegisterContents, ClipmockError> {
        let register = register.normalize(self.alias);
        let contents = self.store.get(&register)?;

        log::debug!(
            "clipboard_get {:?} -> {} line(s), {:?}",
            register.as_str(),
            contents.lines().len(),
            contents.regtype().to_string()
        );

        Ok(contents.clone())
    }

    fn set(&mut self, lines: Vec<String>, regtype: RegType, register: Register) {
        let register = register.normalize(self.alias);

        log::debug!(
            "clipboard_set {:?} <- {} line(s), {:?}",
            register.as_str(),
            lines.len(),
            regtype.to_string()
        );

        self.store.set(register, RegisterContents::new(lines, regtype));
        log::debug!("{} register(s) held", self.store.len());
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
