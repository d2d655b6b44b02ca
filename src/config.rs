use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{JotterError, Result};
use crate::note::format_date;
use crate::storage::DEFAULT_STORAGE_KEY;

pub const HOME_ENV: &str = "JOTTER_HOME";
const DEFAULT_DIR: &str = ".jotter";
const CONFIG_FILE: &str = "config.yaml";

/// Settings read from `<data_dir>/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the database and config file live. Never read from the file.
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Key the note list is stored under.
    pub storage_key: String,
    /// strftime pattern for the note `date` field.
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            date_format: "%m/%d/%Y".to_string(),
        }
    }
}

impl Config {
    /// Resolve the data dir and read its config file if there is one.
    ///
    /// Precedence: explicit `data_dir`, then `$JOTTER_HOME`, then `./.jotter`.
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self> {
        let dir = data_dir
            .or_else(|| env::var_os(HOME_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR));
        Self::load_from(&dir)
    }

    /// Read `<dir>/config.yaml`, falling back to defaults when it is absent.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        let mut config = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            let parsed: Config = serde_yaml::from_str(&raw)?;
            debug!(path = %path.display(), "loaded config");
            parsed
        } else {
            Config::default()
        };
        config.data_dir = dir.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    /// Check the settings that can be set by hand or through public fields.
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(JotterError::Config(
                "storage_key must not be empty".to_string(),
            ));
        }
        if self.date_format.trim().is_empty() {
            return Err(JotterError::Config(
                "date_format must not be empty".to_string(),
            ));
        }
        // Formatting once catches unknown and parse-only specifiers alike.
        format_date(&Local::now(), &self.date_format)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage_key, "notes");
        assert_eq!(config.date_format, "%m/%d/%Y");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_from(tmp.path()).unwrap();
        assert_eq!(config.data_dir, tmp.path());
        assert_eq!(config.storage_key, "notes");
    }

    #[test]
    fn test_explicit_dir_wins() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(config.data_dir, tmp.path());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.yaml"), "date_format: \"%Y-%m-%d\"\n").unwrap();

        let config = Config::load_from(tmp.path()).unwrap();
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert_eq!(config.storage_key, "notes");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.yaml"), "storage_key: [unclosed\n").unwrap();
        assert!(matches!(
            Config::load_from(tmp.path()),
            Err(JotterError::Yaml(_))
        ));
    }

    #[test]
    fn test_bad_date_format_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.yaml"), "date_format: \"%Q\"\n").unwrap();
        assert!(matches!(
            Config::load_from(tmp.path()),
            Err(JotterError::Config(_))
        ));
    }

    #[test]
    fn test_parse_only_date_format_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.yaml"), "date_format: \"%#z\"\n").unwrap();
        assert!(matches!(
            Config::load_from(tmp.path()),
            Err(JotterError::Config(_))
        ));
    }

    #[test]
    fn test_validate_public_fields() {
        let config = Config {
            date_format: "%Q".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(JotterError::Config(_))));
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_empty_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.yaml"), "storage_key: \"\"\n").unwrap();
        assert!(matches!(
            Config::load_from(tmp.path()),
            Err(JotterError::Config(_))
        ));
    }
}
