//! Configuration file parsing for identmoji.toml
//!
//! Every field has a default, so a missing or empty file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "IDENTMOJI_CONFIG";

const CONFIG_FILENAME: &str = "identmoji.toml";
const IDENTIFIER_FILENAME: &str = "identmoji.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentConfig {
    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Where each host fact is read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_uuid_path")]
    pub uuid_path: PathBuf,

    #[serde(default = "default_os_release_path")]
    pub os_release_path: PathBuf,

    #[serde(default = "default_cpuinfo_path")]
    pub cpuinfo_path: PathBuf,

    /// Block device queried for its serial
    #[serde(default = "default_disk_device")]
    pub disk_device: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Persisted identifier read by `--check` when no `-o` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_path: Option<PathBuf>,
}

// Default functions
fn default_uuid_path() -> PathBuf {
    PathBuf::from("/sys/class/dmi/id/product_uuid")
}

fn default_os_release_path() -> PathBuf {
    PathBuf::from("/etc/os-release")
}

fn default_cpuinfo_path() -> PathBuf {
    PathBuf::from("/proc/cpuinfo")
}

fn default_disk_device() -> String {
    "/dev/sda".to_string()
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            uuid_path: default_uuid_path(),
            os_release_path: default_os_release_path(),
            cpuinfo_path: default_cpuinfo_path(),
            disk_device: default_disk_device(),
        }
    }
}

impl IdentConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: IdentConfig =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.expand_home();
        Ok(config)
    }

    /// Loads `$IDENTMOJI_CONFIG`, else `<config dir>/identmoji.toml`.
    ///
    /// A file that does not exist yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match config_file_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// The persisted identifier file `--check` reads by default.
    pub fn identifier_path(&self) -> Option<PathBuf> {
        self.output
            .default_path
            .clone()
            .or_else(default_identifier_path)
    }

    fn expand_home(&mut self) {
        let sources = &mut self.sources;
        for path in [
            &mut sources.uuid_path,
            &mut sources.os_release_path,
            &mut sources.cpuinfo_path,
        ] {
            *path = expand_tilde(path);
        }
        if let Some(path) = self.output.default_path.as_mut() {
            *path = expand_tilde(path);
        }
    }
}

/// `$IDENTMOJI_CONFIG`, else `<config dir>/identmoji.toml`.
pub fn config_file_path() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => dirs::config_dir().map(|dir| dir.join(CONFIG_FILENAME)),
    }
}

/// `<config dir>/identmoji.json`, e.g. `~/.config/identmoji.json` on Linux.
pub fn default_identifier_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(IDENTIFIER_FILENAME))
}

/// Replaces a leading `~/` with the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
