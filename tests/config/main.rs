//! Loading configuration from TOML files.

use std::io::Write;

use counseldesk::{
    ConfigError, DuplicateIdPolicy, SessionConfig, Settings, Store, StoreConfig, StoreError, View,
};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn store_config_from_file_drives_the_store() {
    let file = write_temp(
        r#"
duplicate-ids = "reject"
initial-view = "cases"
seed = true
"#,
    );
    let config = StoreConfig::from_toml_file(file.path()).unwrap();
    assert_eq!(config.duplicate_ids, DuplicateIdPolicy::Reject);

    let store = Store::new(config);
    assert_eq!(store.current_view().unwrap(), View::Cases);
    let err = store
        .add_case(counseldesk::Case::new("1", "Again", "c1"))
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateId { collection: "cases", .. }));
}

#[test]
fn session_config_partial_file() {
    let file = write_temp("search-latency-ms = 0\n");
    let session = SessionConfig::from_toml_file(file.path()).unwrap();
    assert_eq!(session.search_latency_ms, 0);
    assert_eq!(session.recent_cases, 5);
}

#[test]
fn settings_round_trip_through_file() {
    let mut settings = Settings::default();
    settings.profile.first_name = "Ada".into();
    assert_eq!(settings.notifications.toggle("weekly-reports"), Some(true));
    settings.preferences.dark_mode = true;

    let file = write_temp(&settings.to_toml_string().unwrap());
    let loaded = Settings::from_toml_file(file.path()).unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(loaded.profile.display_name(), "Ada Smith");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let file = write_temp("seed = \"maybe\"\n");
    let err = StoreConfig::from_toml_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
