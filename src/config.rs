use std::fs;
use std::path::{Path, PathBuf};

use dirs_next as dirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConvertError;
use crate::model::FormatOptions;

/// Defaults read from `config.toml`. The file is only ever read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub format: FormatOptions,
}

impl Config {
    /// Load from the default location, falling back to defaults when no file exists.
    pub fn load() -> Result<Self, ConvertError> {
        let path = config_file_path()?;
        if path.exists() { Self::load_from(&path) } else { Ok(Config::default()) }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConvertError> {
        if !path.exists() {
            return Err(ConvertError::config(format!(
                "Configuration file '{}' does not exist",
                path.display()
            )));
        }
        debug!(path = %path.display(), "loading configuration");
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load from `explicit` when given, otherwise from the default location.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConvertError> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConvertError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> Result<String, ConvertError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn config_file_path() -> Result<PathBuf, ConvertError> {
    let config_root = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .ok_or_else(|| {
            ConvertError::config("Unable to determine configuration directory for this platform")
        })?;
    Ok(config_root.join("byteconv").join("config.toml"))
}
