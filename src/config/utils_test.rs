use super::*;
use crate::config::defaults::{LOG_FILE_PATH, REMOTE_ENDPOINT};

#[test]
fn test_load_configuration() {
    let config = load_configuration("./testdata/config.toml").expect("failed to load config");

    assert_eq!(config.remote.endpoint, "https://tasks.example.com");
    assert_eq!(config.remote.timeout_secs, Some(30));

    let log = &config.log;
    assert_eq!(log.level.as_deref(), Some("debug"));
    assert_eq!(log.file.path, "/var/logs/taskboard.log");
    assert_eq!(log.file.append, true);

    let filters = log.filters.as_deref().unwrap_or_default();
    assert_eq!(filters.len(), 1);
    assert_eq!(filters[0].module.as_deref(), Some("taskboard::remote"));
    assert_eq!(filters[0].level.as_deref(), Some("trace"));
}

#[test]
fn test_empty_configuration_falls_back_to_defaults() {
    let config: Configuration = toml::from_str("").expect("failed to parse");
    assert_eq!(config.remote.endpoint, REMOTE_ENDPOINT);
    assert_eq!(config.remote.timeout_secs, None);
    assert_eq!(config.log.level.as_deref(), Some("info"));
    assert_eq!(config.log.file.path, LOG_FILE_PATH);
    assert_eq!(config.log.file.append, false);
}

#[test]
fn test_basename() {
    assert_eq!(basename("src/config/utils.rs"), "utils.rs");
    assert_eq!(basename("utils.rs"), "utils.rs");
}
