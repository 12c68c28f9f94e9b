//! Configuration management for b58-prefix

use crate::catalog::{Catalog, PrefixEntry};
use crate::error::{PrefixError, Result};
use crate::prefix::SearchLimits;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// File read when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "b58prefix.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchLimits,
    #[serde(default)]
    pub prefixes: Vec<PrefixEntry>,
}

impl Config {
    /// The configured catalog, or the built-in one when none is listed.
    pub fn catalog(&self) -> Result<Catalog> {
        if self.prefixes.is_empty() {
            Catalog::builtin()
        } else {
            Ok(Catalog::new(self.prefixes.clone()))
        }
    }
}

/// Loads `path`, or `b58prefix.toml` in the working directory.
///
/// A missing default file yields the defaults; a missing explicit file is an error.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_str = match path {
        Some(path) => fs::read_to_string(path)?,
        None => read_optional(Path::new(DEFAULT_CONFIG_FILE))?,
    };
    parse_config(&config_str)
}

/// Reads `path`, treating only a missing file as empty.
fn read_optional(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}

pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = if config_str.trim().is_empty() {
        Config::default()
    } else {
        toml::from_str(config_str)?
    };

    // Validate critical values
    if config.search.max_version_bytes == 0 {
        return Err(PrefixError::Config(
            "search.max_version_bytes must be at least 1".to_string(),
        ));
    }

    for entry in &config.prefixes {
        if entry.name.trim().is_empty() {
            return Err(PrefixError::Config(format!(
                "prefix entry {:?} must have a name",
                entry.prefix.as_str()
            )));
        }
        if entry.payload_length == 0 {
            return Err(PrefixError::Config(format!(
                "prefix entry {:?} must have a positive payload_length",
                entry.name
            )));
        }
    }

    Ok(config)
}
