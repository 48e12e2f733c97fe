use std::path::PathBuf;

use homecard::config::AppConfig;

#[test]
fn test_config_round_trips_through_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("homecard.toml");

    let mut config = AppConfig::default();
    config.styles.path = Some(PathBuf::from("cards.json"));
    config.log.level = Some("debug".to_string());

    config.save(&path).unwrap();
    let loaded = AppConfig::load(&path).unwrap();

    assert_eq!(loaded.styles.path, config.styles.path);
    assert_eq!(loaded.log.level, Some("debug".to_string()));
    assert_eq!(loaded.log.file, None);
}

#[test]
fn test_partial_config_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("homecard.toml");

    std::fs::write(&path, "[log]\nlevel = \"trace\"\n").unwrap();
    let loaded = AppConfig::load(&path).unwrap();

    assert_eq!(loaded.log.level, Some("trace".to_string()));
    assert_eq!(loaded.styles.path, None);
}

#[test]
fn test_malformed_config_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("homecard.toml");

    std::fs::write(&path, "[log\nlevel = ").unwrap();
    let err = AppConfig::load(&path).unwrap_err();

    assert!(err.to_string().contains("TOML parse error"));
}
