// tests/config_test.rs
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use version_check::config::{
    config_file_name, load_config, BehaviorConfig, Config, Urgency, CONFIG_NAME_ENV,
    DEFAULT_CONFIG_NAME,
};
use version_check::ChangeKind;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.behavior, BehaviorConfig::default());
    assert!(config.notify.urgent.contains(&ChangeKind::Major));
    assert!(config.notify.notice.contains(&ChangeKind::Minor));
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[behavior]
ignore_prereleases = true

[notify]
urgent = ["major"]
notice = ["minor", "patch"]
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert!(config.behavior.ignore_prereleases);
    assert!(!config.behavior.strict);
    assert_eq!(config.urgency_for(ChangeKind::Patch), Urgency::Notice);
    assert_eq!(config.urgency_for(ChangeKind::Prerelease), Urgency::Silent);
}

#[test]
fn test_load_fixture() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/versioncheck.toml");
    let config = load_config(Some(path)).expect("Failed to load test config");
    assert!(config.behavior.strict);
    assert_eq!(config.urgency_for(ChangeKind::Premajor), Urgency::Urgent);
}

#[test]
fn test_load_missing_explicit_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/does-not-exist.toml");
    let err = load_config(Some(path)).unwrap_err();
    assert!(err.to_string().contains("I/O error"));
}

#[test]
fn test_load_invalid_change_kind() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[notify]\nurgent = [\"gigantic\"]\n")
        .unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Invalid configuration file"));
}

#[test]
#[serial]
fn test_config_file_name_default() {
    std::env::remove_var(CONFIG_NAME_ENV);
    assert_eq!(config_file_name(), DEFAULT_CONFIG_NAME);
}

#[test]
#[serial]
fn test_config_file_name_from_env() {
    std::env::set_var(CONFIG_NAME_ENV, "testConfig");
    assert_eq!(config_file_name(), "testConfig");
    std::env::set_var(CONFIG_NAME_ENV, "  ");
    assert_eq!(config_file_name(), DEFAULT_CONFIG_NAME);
    std::env::remove_var(CONFIG_NAME_ENV);
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("checkcfg.toml"),
        "[behavior]\nstrict = true\n",
    )
    .unwrap();

    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    std::env::set_var(CONFIG_NAME_ENV, "checkcfg.toml");

    let result = load_config(None);

    std::env::remove_var(CONFIG_NAME_ENV);
    std::env::set_current_dir(original_dir).unwrap();

    assert!(result.unwrap().behavior.strict);
}
