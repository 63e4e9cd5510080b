use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Which image URLs get rewritten, and which files are looked at.
///
/// Every field falls back to its default when missing from the TOML file, so
/// a config only needs to name what differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Enterprise GitHub host serving the images, e.g. `github.gatech.edu`
    pub host: String,
    /// Owner of the repository whose attachment URLs use the numeric form
    pub owner: String,
    pub repo: String,
    /// Branch used in the rewritten `raw/<branch>/assets` path
    pub branch: String,
    /// Content file extension, without the dot
    pub extension: String,
    /// File names never read or modified
    pub reserved_files: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "github.gatech.edu".to_string(),
            owner: "mmoghaddam3".to_string(),
            repo: "XRE".to_string(),
            branch: "main".to_string(),
            extension: "md".to_string(),
            reserved_files: vec!["index.md".to_string(), "about.md".to_string()],
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-imgfix");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}
