//! Configuration file support.
//!
//! Loads config from `$XDG_CONFIG_HOME/zcalc/config.toml`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// User preferences for the calculator front end.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Start on the scientific keypad.
    pub scientific: bool,
    /// Show the display with thousands separators.
    pub group_digits: bool,
    /// Copy the final result to the clipboard.
    pub copy_result: bool,
}

impl Config {
    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match config_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        Self::parse(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Parse config from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Get the default config file path.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.scientific);
        assert!(!config.group_digits);
        assert!(!config.copy_result);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = Config::parse("scientific = true").unwrap();
        assert!(config.scientific);
        assert!(!config.group_digits);
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            "scientific = false\ngroup_digits = true\ncopy_result = true\n",
        )
        .unwrap();
        assert_eq!(
            config,
            Config {
                scientific: false,
                group_digits: true,
                copy_result: true,
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(Config::parse("precision = 4").is_err());
        assert!(Config::parse("scientific = \"yes\"").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("zcalc-missing-config-test.toml");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let path = std::env::temp_dir().join(format!("zcalc-bad-config-{}.toml", std::process::id()));
        std::fs::write(&path, "scientific = = true").unwrap();
        let result = Config::load(Some(&path));
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
