//! Configuration with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/coursecat/coursecat.toml`
//!
//! A missing config file is not an error; defaults apply silently.

use std::path::PathBuf;

use config::{Config, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::CatalogResult;

/// User-tunable settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Field separator in course files; only the first character is used
    pub delimiter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
        }
    }
}

impl Settings {
    /// Path of the global config file, if a home directory can be resolved.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "coursecat").map(|dirs| dirs.config_dir().join("coursecat.toml"))
    }

    /// Load settings, overlaying the global config file onto defaults.
    pub fn load() -> CatalogResult<Self> {
        let mut builder = Config::builder().set_default("delimiter", ",")?;

        if let Some(path) = Self::global_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }

    /// Effective delimiter character.
    pub fn delimiter(&self) -> char {
        self.delimiter.chars().next().unwrap_or(',')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delimiter_is_comma() {
        let settings = Settings::default();
        assert_eq!(settings.delimiter(), ',');
    }

    #[test]
    fn empty_delimiter_falls_back_to_comma() {
        let settings = Settings {
            delimiter: String::new(),
        };
        assert_eq!(settings.delimiter(), ',');
    }
}
