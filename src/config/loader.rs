//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::SplitConfig;

/// Loads and provides access to the engine configuration.
///
/// # Example
///
/// ```no_run
/// use split_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
/// assert_eq!(loader.config().currency_scale, 2);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SplitConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/engine.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the file
    /// is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Creates a loader carrying the built-in defaults, without touching the
    /// filesystem.
    pub fn with_defaults() -> Self {
        Self {
            config: SplitConfig::default(),
        }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }
}
