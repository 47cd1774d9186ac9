// Configuration module for clipmock
// This module handles loading and parsing configuration from ~/.config/clipmock/config.toml

mod types;

pub use types::{AliasConfig, AliasPolicy, Config, HostConfig, Transport};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

impl ConfigResult {
    fn defaults(warning: Option<String>) -> Self {
        ConfigResult {
            config: Config::default(),
            warning,
        }
    }
}

/// Loads configuration from `path`, or ~/.config/clipmock/config.toml when none is given.
/// Returns default configuration if the default file doesn't exist or on parse errors.
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    match path {
        Some(path) if !path.exists() => ConfigResult::defaults(Some(format!(
            "Config file {} not found",
            path.display()
        ))),
        Some(path) => load_config_file(path),
        None => {
            let config_path = get_config_path();
            if !config_path.exists() {
                log::debug!("Config file does not exist, using defaults");
                return ConfigResult::defaults(None);
            }
            load_config_file(&config_path)
        }
    }
}

fn load_config_file(config_path: &Path) -> ConfigResult {
    log::debug!("Loading config from {:?}", config_path);

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult::defaults(Some(format!("Failed to read config: {}", e)));
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            log::debug!(
                "Config parsed successfully: alias={:?} transport={:?}",
                config.alias.unnamed,
                config.host.transport
            );
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult::defaults(Some(format!("Invalid config: {}", e)))
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/clipmock/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("clipmock")
        .join("config.toml")
}
