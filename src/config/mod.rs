//! Configuration for a desk session.
//!
//! [`StoreConfig`] shapes how the [`Store`](crate::Store) treats its
//! collections, [`SessionConfig`] tunes the views, and [`Settings`] holds the
//! user-facing profile, notification and display preferences. All three are
//! serde types with field-level defaults and can be read from TOML.

mod session;
mod settings;

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;

pub use session::{DuplicateIdPolicy, SessionConfig, StoreConfig};
pub use settings::{NotificationSettings, Preferences, Profile, Settings};

/// Error type for configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The file could not be read.
    Io { path: String, message: String },
    /// The document is not valid TOML for the target type.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "failed to read config {}: {}", path, message)
            }
            ConfigError::Parse(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub(crate) fn from_toml_str<T: DeserializeOwned>(source: &str) -> Result<T, ConfigError> {
    toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
}

pub(crate) fn from_toml_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), "loading config");
    from_toml_str(&source)
}
