use crate::error::{Result, TodozError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Configuration for todoz, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodozConfig {
    /// Shortest password accepted by registration and password changes
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,

    /// Render envelopes as indented JSON
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

fn default_min_password_length() -> usize {
    DEFAULT_MIN_PASSWORD_LENGTH
}

fn default_pretty_json() -> bool {
    true
}

impl Default for TodozConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            pretty_json: true,
        }
    }
}

impl TodozConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodozError::Io)?;
        let config: TodozConfig =
            serde_json::from_str(&content).map_err(TodozError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_password_length == 0 {
            return Err(TodozError::invalid(
                "min_password_length must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TodozConfig::default();
        assert_eq!(config.min_password_length, 6);
        assert!(config.pretty_json);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = TodozConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, TodozConfig::default());
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = TodozConfig {
            min_password_length: 12,
            pretty_json: false,
        };
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            serde_json::to_string_pretty(&config).unwrap(),
        )
        .unwrap();

        let loaded = TodozConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"pretty_json": false}"#,
        )
        .unwrap();

        let loaded = TodozConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.min_password_length, 6);
        assert!(!loaded.pretty_json);
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"min_password_length": 0}"#,
        )
        .unwrap();

        assert!(TodozConfig::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_malformed_file_is_a_serialization_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "not json").unwrap();

        assert!(matches!(
            TodozConfig::load(temp_dir.path()),
            Err(TodozError::Serialization(_))
        ));
    }
}
