use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::AliasPolicy;

/// A register identifier as the host sends it.
///
/// Editors name registers with a single character, but the name is carried
/// as a string so that anything the host sends can be stored and reported
/// back without loss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Register(String);

impl Register {
    /// Primary selection (`*`).
    pub const PRIMARY: &'static str = "*";
    /// Clipboard selection (`+`).
    pub const CLIPBOARD: &'static str = "+";
    /// Unnamed register (`"`), an alias for the primary selection.
    pub const UNNAMED: &'static str = "\"";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn primary() -> Self {
        Self::new(Self::PRIMARY)
    }

    pub fn clipboard() -> Self {
        Self::new(Self::CLIPBOARD)
    }

    pub fn unnamed() -> Self {
        Self::new(Self::UNNAMED)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unnamed(&self) -> bool {
        self.0 == Self::UNNAMED
    }

    /// Maps an alias to the register it stands for under `policy`.
    pub fn normalize(self, policy: AliasPolicy) -> Self {
        match policy {
            AliasPolicy::Star if self.is_unnamed() => Self::primary(),
            _ => self,
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Register {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Register {
    fn from(name: String) -> Self {
        Self(name)
    }
}
