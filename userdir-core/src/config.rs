//! Configuration management
//!
//! Optional `settings.json` in the data directory:
//! ```json
//! {
//!   "server": { "host": "0.0.0.0", "port": 8888 },
//!   "store": { "file": "users.txt", "createIfMissing": true }
//! }
//! ```

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::result::Error;

/// Port the service listens on unless configured otherwise
pub const DEFAULT_PORT: u16 = 8888;

/// Store file name, relative to the data directory
pub const DEFAULT_STORE_FILE: &str = "users.txt";

/// Settings file name, relative to the data directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSettings {
    #[serde(default = "default_store_file")]
    pub file: PathBuf,
    #[serde(default = "default_true")]
    pub create_if_missing: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            file: default_store_file(),
            create_if_missing: true,
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_store_file() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load config from the data directory
    ///
    /// A missing settings file yields the defaults. A settings file that
    /// exists but does not parse is an error.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join(SETTINGS_FILE);

        if !settings_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&settings_path)
            .with_context(|| format!("Failed to read {:?}", settings_path))?;
        let config = serde_json::from_str(&content)
            .map_err(|e| Error::config(format!("{:?}: {}", settings_path, e)))?;

        Ok(config)
    }

    /// Save config to the data directory
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join(SETTINGS_FILE);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Write the effective settings to the data directory
    ///
    /// Existing values are kept and missing ones filled with defaults, so
    /// the file ends up listing every setting. Returns the settings path.
    pub fn init(data_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory {:?}", data_dir))?;

        let config = Self::load(data_dir)?;
        config.save(data_dir)?;

        Ok(data_dir.join(SETTINGS_FILE))
    }

    /// Store path, resolved against the data directory
    pub fn store_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.store.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_settings_file() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.server.port, 8888);
        assert!(config.store.create_if_missing);
        assert_eq!(config.store_path(dir.path()), dir.path().join("users.txt"));
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{ "store": { "file": "data/names.txt" }, "extra": 1 }"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.server, ServerSettings::default());
        assert_eq!(config.store.file, PathBuf::from("data/names.txt"));
        assert!(config.store.create_if_missing);
    }

    #[test]
    fn test_invalid_settings_is_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "{ not json").unwrap();

        let err = Config::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_init_writes_defaults() {
        let dir = tempdir().unwrap();
        let data_dir = dir.path().join("data");

        let path = Config::init(&data_dir).unwrap();

        assert_eq!(path, data_dir.join(SETTINGS_FILE));
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["server"]["port"], 8888);
        assert_eq!(written["store"]["createIfMissing"], true);
        assert_eq!(Config::load(&data_dir).unwrap(), Config::default());
    }

    #[test]
    fn test_init_keeps_existing_values() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), r#"{ "server": { "port": 9001 } }"#)
            .unwrap();

        Config::init(dir.path()).unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.store, StoreSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let mut config = Config::default();
        config.server.port = 9000;
        config.store.create_if_missing = false;

        config.save(dir.path()).unwrap();

        assert_eq!(Config::load(dir.path()).unwrap(), config);
    }
}
