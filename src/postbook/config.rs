use crate::error::{PostbookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "postbook.json";
const DEFAULT_DATA_FILE: &str = "post_office.csv";
const DEFAULT_LOG_FILE: &str = "post_office.log";

/// Configuration for postbook, stored as postbook.json next to the data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostbookConfig {
    /// Path of the CSV data file.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Path of the append-only diagnostics log.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl Default for PostbookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_file: default_log_file(),
        }
    }
}

impl PostbookConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PostbookError::Io)?;
        let config: PostbookConfig =
            serde_json::from_str(&content).map_err(PostbookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PostbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PostbookError::Serialization)?;
        fs::write(config_path, content).map_err(PostbookError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PostbookConfig::default();
        assert_eq!(config.data_file, PathBuf::from("post_office.csv"));
        assert_eq!(config.log_file, PathBuf::from("post_office.log"));
    }

    #[test]
    fn load_missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PostbookConfig::load(dir.path()).unwrap();
        assert_eq!(config, PostbookConfig::default());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = PostbookConfig::default();
        config.data_file = PathBuf::from("customers.csv");
        config.save(dir.path()).unwrap();

        let loaded = PostbookConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, PathBuf::from("customers.csv"));
        assert_eq!(loaded.log_file, PathBuf::from("post_office.log"));
    }

    #[test]
    fn serialization_roundtrip() {
        let config = PostbookConfig {
            data_file: PathBuf::from("a.csv"),
            log_file: PathBuf::from("b.log"),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: PostbookConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
