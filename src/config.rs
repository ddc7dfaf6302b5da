// Configuration module for checkgrid
// This module handles loading and parsing configuration from ~/.config/checkgrid/config.toml

mod types;

pub use types::{Config, GridConfig, ThemeConfig};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
///
/// `warning` is set whenever something in the file was ignored; the caller
/// shows it in the status line.
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

impl ConfigResult {
    fn defaults(warning: Option<String>) -> Self {
        Self {
            config: Config::default(),
            warning,
        }
    }
}

/// Loads ~/.config/checkgrid/config.toml, falling back to defaults
pub fn load_config() -> ConfigResult {
    load_config_from(&get_config_path())
}

/// Loads configuration from an explicit path
///
/// A missing file is silent. Unreadable or malformed files fall back to the
/// defaults with a warning, and a bad color only resets the theme section.
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("No config at {:?}, using defaults", config_path);
        return ConfigResult::defaults(None);
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Cannot read {:?}: {}", config_path, e);
            return ConfigResult::defaults(Some(format!("Failed to read config: {}", e)));
        }
    };

    let mut config: Config = match toml::from_str(&contents) {
        Ok(config) => config,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Cannot parse {:?}: {}", config_path, e);
            return ConfigResult::defaults(Some(format!("Invalid config: {}", e)));
        }
    };

    let warning = config.theme.palette().err().map(|e| {
        #[cfg(debug_assertions)]
        log::error!("Resetting theme from {:?}: {}", config_path, e);
        config.theme = ThemeConfig::default();
        format!("Invalid theme: {}", e)
    });

    #[cfg(debug_assertions)]
    log::debug!("Loaded config {:?}", config);

    ConfigResult { config, warning }
}

/// Same location on every platform, under the home directory
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("checkgrid")
        .join("config.toml")
}
