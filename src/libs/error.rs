//! Error types for the update pipeline and configuration loading.
//!
//! Every failure in a run is terminal. Steps return these typed errors up to
//! the command layer, and `main` is the only place that prints them and picks
//! an exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that end an update run.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// The product directory or its executable is missing under the install root.
    #[error("Invalid exe path, unable to auto-detect.")]
    NotInstalled { expected: PathBuf },

    /// The file-version query exited with a non-zero (or missing) status code.
    #[error("Invalid code when checking version: {}", display_code(.code))]
    VersionQueryFailed { code: Option<i32> },

    /// The file-version text did not split into three or four components.
    #[error("Unexpected version schema. Expected 3-4 values, got {0}")]
    UnexpectedVersionSchema(usize),

    /// A version component was not a non-negative integer.
    #[error("Invalid version component: '{0}'")]
    InvalidVersionComponent(String),

    /// The vendor response contained no version-shaped text.
    #[error("Unable to find new version!")]
    RemoteVersionNotFound,

    /// The installer ran but reported failure. The installer file is kept.
    #[error("Update failed!\n{output}")]
    InstallerFailed {
        code: Option<i32>,
        output: String,
        installer: PathBuf,
    },

    #[error("Failed to start '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failures while resolving the runtime configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Install root is not set: define the {0} environment variable or pass --install-root")]
    MissingInstallRoot(&'static str),

    #[error("Failed to read configuration file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn display_code(code: &Option<i32>) -> String {
    code.map(|c| c.to_string()).unwrap_or_else(|| "terminated by signal".to_string())
}
