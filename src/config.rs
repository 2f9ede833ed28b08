//! User configuration loaded from `~/.config/zcalc/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::calculator::PercentKey;
use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.toml";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// What the `%` key dispatches.
    pub percent_key: PercentKey,
    /// Copy the final result to the clipboard.
    pub copy_result: bool,
    /// Print the keypad layout before the display.
    pub show_keypad: bool,
}

/// Get config directory path: ~/.config/zcalc/
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("zcalc"))
}

/// Default location of the config file, if a config directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

impl Config {
    /// Load the config from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load the config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
        assert_eq!(Config::default().percent_key, PercentKey::Operation);
    }

    #[test]
    fn test_parse_all_fields() {
        let config = Config::parse(
            r#"
            percent_key = "convert"
            copy_result = true
            show_keypad = true
            "#,
        )
        .unwrap();
        assert_eq!(config.percent_key, PercentKey::Convert);
        assert!(config.copy_result);
        assert!(config.show_keypad);
    }

    #[test]
    fn test_invalid_percent_key() {
        assert!(Config::parse(r#"percent_key = "sometimes""#).is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("zcalc-test-missing").join(CONFIG_FILE);
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let dir = std::env::temp_dir().join(format!("zcalc-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        std::fs::write(&path, "copy_result = maybe").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
