use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::font::FontResolver;
use crate::style::StyleConfig;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub font: FontSettings,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct FontSettings {
    /// Replaces the built-in candidate list when set.
    pub candidates: Option<Vec<PathBuf>>,
}

impl FontSettings {
    pub fn resolver(&self) -> FontResolver {
        match &self.candidates {
            Some(paths) => FontResolver::new(paths.iter().cloned()),
            None => FontResolver::default(),
        }
    }
}

impl Config {
    /// Loads the user config file, falling back to defaults.
    pub fn load() -> Self {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Config::default(),
        }
    }

    pub fn load_from(config_path: &Path) -> Self {
        if !config_path.exists() {
            return Config::default();
        }

        let content = match fs::read_to_string(config_path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Failed to read config file: {}", e);
                return Config::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => {
                log::debug!("Loaded config from {}", config_path.display());
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Config::default()
            }
        }
    }
}

fn config_file_path() -> Option<PathBuf> {
    let base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(config_dir) => PathBuf::from(config_dir),
        None => dirs::config_dir()?,
    };
    Some(base.join("outline-text").join("config.toml"))
}
