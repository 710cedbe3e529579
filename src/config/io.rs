// src/config/io.rs
use super::Config;
use crate::constants::CONFIG_FILE;
use crate::error::{Result, SiteLintError};
use std::fs;
use std::path::Path;

/// Loads `sitelint.toml` from `dir`, falling back to defaults when absent.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_from_dir(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    load_file(&path)
}

/// Loads an explicit config file.
///
/// # Errors
/// Returns error if the file cannot be read or parsed.
pub fn load_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| SiteLintError::io(path, e))?;
    let config = parse_toml(&content, path)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Parses TOML content; `origin` is only used for error messages.
///
/// # Errors
/// Returns error on malformed TOML or mistyped fields.
pub fn parse_toml(content: &str, origin: &Path) -> Result<Config> {
    toml::from_str(content).map_err(|e| SiteLintError::Config {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })
}
