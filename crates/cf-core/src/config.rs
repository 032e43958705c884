//! Configuration types and parsing for costflow.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main project configuration from costflow.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Config format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Path of the estimate database, relative to the config file
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Section label applied to imported rows before any header row is seen
    #[serde(default = "default_section")]
    pub default_section: String,
}

fn default_version() -> String {
    "1".to_string()
}

fn default_database_path() -> String {
    "costflow.duckdb".to_string()
}

fn default_section() -> String {
    "Chung".to_string()
}

impl Config {
    /// Load configuration from a costflow.yml file.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| CoreError::ConfigParseError {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the database path against the directory holding the config.
    pub fn database_path_absolute(&self, project_dir: &Path) -> PathBuf {
        let path = Path::new(&self.database_path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_dir.join(path)
        }
    }

    fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "project name must not be empty".to_string(),
            });
        }
        if self.database_path.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "database_path must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "costflow".to_string(),
            version: default_version(),
            database_path: default_database_path(),
            default_section: default_section(),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
