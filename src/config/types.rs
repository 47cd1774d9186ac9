// Configuration type definitions

use clap::ValueEnum;
use serde::Deserialize;

/// What the unnamed register (`"`) resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AliasPolicy {
    /// `"` is read and written through `*`
    #[default]
    Star,
    /// `"` is an ordinary register
    None,
}

/// How the provider reaches the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Frames on stdin/stdout
    #[default]
    Stdio,
    /// Unix socket path or TCP `host:port`
    Socket,
}

/// Alias configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AliasConfig {
    #[serde(default)]
    pub unnamed: AliasPolicy,
}

/// Host connection section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostConfig {
    #[serde(default)]
    pub transport: Transport,
    #[serde(default)]
    pub address: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub alias: AliasConfig,
    #[serde(default)]
    pub host: HostConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
