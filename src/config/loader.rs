//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, GraceRules, TimeBoundaries};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/engine/
/// ├── boundaries.yaml   # Session window minute-of-day values
/// └── grace.yaml        # Grace-period and rounding thresholds
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine").unwrap();
/// assert_eq!(loader.config().boundaries.morning_start, 480);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// The loaded configuration is validated before being returned.
    ///
    /// # Errors
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or the combined configuration fails [`EngineConfig::validate`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let boundaries = Self::load_yaml::<TimeBoundaries>(&path.join("boundaries.yaml"))?;
        let grace = Self::load_yaml::<GraceRules>(&path.join("grace.yaml"))?;

        let config = EngineConfig { boundaries, grace };
        config.validate()?;

        Ok(Self { config })
    }

    /// Returns a loader carrying the compiled-in default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_reports_config_not_found() {
        let error = ConfigLoader::load("/definitely/not/a/real/path").unwrap_err();
        assert!(matches!(error, EngineError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_with_defaults_matches_default_config() {
        let loader = ConfigLoader::with_defaults();
        assert_eq!(loader.config(), &EngineConfig::default());
    }

    #[test]
    fn test_load_from_checked_in_config_dir() {
        let loader = ConfigLoader::load("./config/engine").unwrap();
        assert_eq!(loader.config(), &EngineConfig::default());
    }

    #[test]
    fn test_invalid_yaml_reports_parse_error() {
        let dir = std::env::temp_dir().join("attendance_engine_bad_config");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("boundaries.yaml"), "morning_start: [not a number").unwrap();
        fs::write(dir.join("grace.yaml"), "on_time_grace: 5").unwrap();

        let error = ConfigLoader::load(&dir).unwrap_err();
        assert!(matches!(error, EngineError::ConfigParseError { .. }));

        fs::remove_dir_all(&dir).ok();
    }
}
