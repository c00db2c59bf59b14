//! Configuration file support.
//!
//! An optional TOML file supplies defaults for the ingestion flags:
//!
//! ```toml
//! date_order = "month_first"
//! commit_policy = "valid-subset"
//! encoding = "windows-1252"
//! max_upload_bytes = 1048576
//! ```
//!
//! Command-line flags take precedence over the file, and the file over the
//! built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use intake_dates::DateOrder;
use intake_ingest::{CommitPolicy, DEFAULT_ENCODING, MAX_UPLOAD_SIZE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the settings file.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for [`Settings`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Defaults applied when the corresponding flag is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Day/month precedence for ambiguous dates.
    pub date_order: DateOrder,
    /// What to commit when some rows fail.
    pub commit_policy: CommitPolicy,
    /// Encoding label for uploads.
    pub encoding: String,
    /// Largest accepted upload, in bytes.
    pub max_upload_bytes: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_order: DateOrder::default(),
            commit_policy: CommitPolicy::default(),
            encoding: DEFAULT_ENCODING.to_string(),
            max_upload_bytes: MAX_UPLOAD_SIZE,
        }
    }
}

impl Settings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed content or unknown keys.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Loads settings from `path`, or returns defaults when no path is given.
///
/// # Errors
///
/// Returns [`ConfigError`] when an explicitly named file cannot be read or parsed.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let Some(path) = path else {
        tracing::debug!("no config file given, using defaults");
        return Ok(Settings::default());
    };

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = Settings::from_toml(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "loaded settings");
    Ok(settings)
}
