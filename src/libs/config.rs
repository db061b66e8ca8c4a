//! Runtime configuration for an update run.
//!
//! Configuration is resolved once at startup into an immutable [`Config`]
//! and passed down explicitly, so no step reads the process environment on
//! its own.
//!
//! ## Sources
//!
//! Values are layered, later sources winning:
//!
//! - **Build metadata**: vendor hosts from `[package.metadata]` in `Cargo.toml`
//! - **Config file**: optional `config.json` in the per-user data directory
//! - **Environment**: `ProgramFiles` for the install root (a `.env` file in
//!   the working directory is loaded first)
//! - **Command line**: `--install-root` overrides everything
//!
//! ## Config File
//!
//! Every field is optional:
//!
//! ```json
//! {
//!   "install_root": "D:\\Apps",
//!   "check_host": "https://ccleaner.com",
//!   "download_host": "https://download.ccleaner.com",
//!   "silent_flag": "/S"
//! }
//! ```

use super::data_storage::DataStorage;
use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable holding the program-installation root.
pub const INSTALL_ROOT_VAR: &str = "ProgramFiles";

/// Switch that makes the vendor's NSIS installers run unattended.
pub const DEFAULT_SILENT_FLAG: &str = "/S";

/// Contents of `config.json`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent_flag: Option<String>,
}

impl ConfigFile {
    /// Reads `path`, returning an empty file when it does not exist.
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads `config.json` from the per-user data directory.
    pub fn read() -> Result<Self, ConfigError> {
        Self::read_from(&DataStorage::new().get_path(CONFIG_FILE_NAME))
    }
}

/// Resolved settings for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Directory containing `<Product>/<Product>.exe`.
    pub install_root: PathBuf,
    /// Base URL of the version-check endpoint.
    pub check_host: String,
    /// Base URL installers are downloaded from.
    pub download_host: String,
    /// Argument passed to the installer.
    pub silent_flag: String,
}

impl Config {
    /// Builds a config with the vendor defaults.
    pub fn new(install_root: impl Into<PathBuf>) -> Self {
        Self {
            install_root: install_root.into(),
            check_host: APP_METADATA_CHECK_HOST.to_string(),
            download_host: APP_METADATA_DOWNLOAD_HOST.to_string(),
            silent_flag: DEFAULT_SILENT_FLAG.to_string(),
        }
    }

    /// Layers file, environment and command-line values over the defaults.
    ///
    /// The install root comes from `cli_root`, then the config file, then
    /// `env_root`. If none is set the run cannot proceed.
    pub fn resolve(file: ConfigFile, env_root: Option<String>, cli_root: Option<PathBuf>) -> Result<Self, ConfigError> {
        let install_root = cli_root
            .or(file.install_root)
            .or_else(|| env_root.filter(|root| !root.trim().is_empty()).map(PathBuf::from))
            .ok_or(ConfigError::MissingInstallRoot(INSTALL_ROOT_VAR))?;

        let mut config = Self::new(install_root);
        if let Some(check_host) = file.check_host {
            config.check_host = check_host;
        }
        if let Some(download_host) = file.download_host {
            config.download_host = download_host;
        }
        if let Some(silent_flag) = file.silent_flag {
            config.silent_flag = silent_flag;
        }

        Ok(config)
    }

    /// Loads the configuration from the data directory and the environment.
    pub fn read(cli_root: Option<PathBuf>) -> Result<Self, ConfigError> {
        let file = ConfigFile::read()?;
        let env_root = std::env::var(INSTALL_ROOT_VAR).ok();
        let config = Self::resolve(file, env_root, cli_root)?;
        debug!("install root: {}", config.install_root.display());
        Ok(config)
    }
}
