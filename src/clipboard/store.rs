use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::register::Register;
use super::regtype::RegType;
use crate::error::ClipmockError;

/// Lines held by a register together with their paste mode.
///
/// Serializes as the two-element `[lines, regtype]` array hosts expect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterContents(pub Vec<String>, pub RegType);

impl RegisterContents {
    pub fn new(lines: Vec<String>, regtype: RegType) -> Self {
        Self(lines, regtype)
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }

    pub fn regtype(&self) -> &RegType {
        &self.1
    }
}

/// Registers the store knows about at construction.
pub const SEEDED_REGISTERS: [&str; 2] = [Register::PRIMARY, Register::CLIPBOARD];

/// Flat register table.
///
/// Reads never create entries; a register only exists once it was seeded or
/// written.
#[derive(Debug, Clone)]
pub struct ClipboardStore {
    registers: HashMap<Register, RegisterContents>,
}

impl Default for ClipboardStore {
    fn default() -> Self {
        let registers = SEEDED_REGISTERS
            .iter()
            .map(|name| (Register::from(*name), RegisterContents::default()))
            .collect();
        Self { registers }
    }
}

impl ClipboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, register: &Register) -> Result<&RegisterContents, ClipmockError> {
        self.registers
            .get(register)
            .ok_or_else(|| ClipmockError::UnknownRegister(register.clone()))
    }

    pub fn set(&mut self, register: Register, contents: RegisterContents) {
        self.registers.insert(register, contents);
    }

    pub fn len(&self) -> usize {
        self.registers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
