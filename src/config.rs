//! Configuration handling for helm-scaffold.
//! The configuration file is optional and lives in the chart directory.
//! Supported formats: JSON and YAML (.helm-scaffold.json, .helm-scaffold.yml,
//! .helm-scaffold.yaml).

use crate::constants::{CONFIG_FILES, DEFAULT_PATTERN};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings supplied from outside the scaffolding core.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Root of the template library the catalog is built from
    pub templates_dir: Option<PathBuf>,

    /// Placeholder regular expression; the first capture group is the name
    pub pattern: String,

    /// Extra default values for the resolver, keyed by variable name
    pub defaults: IndexMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: None,
            pattern: DEFAULT_PATTERN.to_string(),
            defaults: IndexMap::new(),
        }
    }
}

impl Config {
    /// Returns the catalog root.
    ///
    /// # Errors
    /// * `Error::ConfigError` if no templates directory was configured
    pub fn templates_dir(&self) -> Result<&Path> {
        self.templates_dir.as_deref().ok_or_else(|| {
            Error::ConfigError(
                "no templates directory configured (set 'templatesDir' or pass --templates-dir)"
                    .to_string(),
            )
        })
    }
}

/// Reads the first configuration file found in `dir`.
///
/// # Returns
/// * `Result<Option<String>>` - Contents of the first found file, `None` if there is none
pub fn load_config<P: AsRef<Path>>(dir: P, config_files: &[&str]) -> Result<Option<String>> {
    for file in config_files {
        let config_path = dir.as_ref().join(file);
        if config_path.is_file() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(Some(std::fs::read_to_string(&config_path)?));
        }
    }
    debug!("No configuration file found (tried: {})", config_files.join(", "));
    Ok(None)
}

/// Parses configuration content, trying JSON first and YAML second.
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Loads the configuration for the chart in `dir`, falling back to defaults.
///
/// A relative `templatesDir` is taken relative to `dir`, where the file lives.
pub fn get_config<P: AsRef<Path>>(dir: P) -> Result<Config> {
    let dir = dir.as_ref();
    let mut config = match load_config(dir, &CONFIG_FILES)? {
        Some(content) => parse_config(&content)?,
        None => return Ok(Config::default()),
    };
    if let Some(templates_dir) = config.templates_dir.take() {
        config.templates_dir = Some(if templates_dir.is_relative() {
            dir.join(templates_dir)
        } else {
            templates_dir
        });
    }
    Ok(config)
}
