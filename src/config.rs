//! User configuration loaded from `config.toml`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::calculator::ResultStyle;

/// Settings read from the config file. Missing keys fall back to defaults.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How successful results are displayed.
    pub style: ResultStyle,
    /// Copy successful results to the clipboard.
    pub copy_result: bool,
}

/// Default location: `<config dir>/keycalc/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("keycalc").join("config.toml"))
}

pub fn load_config_str(config: &str) -> Result<Config> {
    let c: Config = toml::from_str(config)?;
    Ok(c)
}

/// Load the config from `path`, or from the default location.
///
/// A missing file yields the defaults; a file that cannot be read or parsed
/// is an error.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => path,
        None => {
            tracing::debug!("no config directory, using defaults");
            return Ok(Config::default());
        }
    };

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    load_config_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}
