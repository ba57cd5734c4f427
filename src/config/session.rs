use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::model::View;

/// What the store does when a record arrives with an id that is already taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateIdPolicy {
    /// Append anyway; both records stay in the collection.
    #[default]
    Allow,
    /// Refuse the insert with [`StoreError::DuplicateId`](crate::StoreError::DuplicateId).
    Reject,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StoreConfig {
    pub duplicate_ids: DuplicateIdPolicy,
    pub initial_view: View,
    /// Load the demo cases and clients at construction.
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            duplicate_ids: DuplicateIdPolicy::Allow,
            initial_view: View::Dashboard,
            seed: true,
        }
    }
}

impl StoreConfig {
    /// Default settings without the demo seed.
    pub fn unseeded() -> Self {
        StoreConfig {
            seed: false,
            ..Self::default()
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        super::from_toml_str(source)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        super::from_toml_file(path)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SessionConfig {
    /// How many cases the dashboard lists under "Recent Cases".
    pub recent_cases: usize,
    /// How many appointments the calendar lists under "Upcoming".
    pub upcoming_appointments: usize,
    /// How many tags a document card shows before "+N more".
    pub visible_tags: usize,
    /// Artificial delay before a search is marked complete.
    pub search_latency_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            recent_cases: 5,
            upcoming_appointments: 3,
            visible_tags: 3,
            search_latency_ms: 500,
        }
    }
}

impl SessionConfig {
    pub fn search_latency(&self) -> Duration {
        Duration::from_millis(self.search_latency_ms)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        super::from_toml_str(source)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        super::from_toml_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_config_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.duplicate_ids, DuplicateIdPolicy::Allow);
        assert_eq!(config.initial_view, View::Dashboard);
        assert!(config.seed);
        assert!(!StoreConfig::unseeded().seed);
    }

    #[test]
    fn store_config_from_partial_toml() {
        let config = StoreConfig::from_toml_str(
            r#"
            duplicate-ids = "reject"
            initial-view = "cases"
            "#,
        )
        .unwrap();
        assert_eq!(config.duplicate_ids, DuplicateIdPolicy::Reject);
        assert_eq!(config.initial_view, View::Cases);
        assert!(config.seed);
    }

    #[test]
    fn session_config_latency() {
        let config = SessionConfig::from_toml_str("search-latency-ms = 25").unwrap();
        assert_eq!(config.search_latency(), Duration::from_millis(25));
        assert_eq!(config.recent_cases, 5);
    }

    #[test]
    fn unknown_view_is_a_parse_error() {
        let err = StoreConfig::from_toml_str(r#"initial-view = "settings""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
