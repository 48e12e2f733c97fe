use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cmd() -> Command {
    cargo_bin_cmd!("homecard")
}

#[test]
fn test_print_falls_back_to_bundled_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let styles_path = dir.path().join("card-styles.json");

    cmd()
        .args(["--styles", styles_path.to_str().unwrap(), "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("artCard"))
        .stdout(predicate::str::contains("beianCard"))
        .stdout(predicate::str::contains("\"offsetX\": null"));
}

#[test]
fn test_reset_writes_the_bundled_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let styles_path = dir.path().join("card-styles.json");

    cmd()
        .args(["--styles", styles_path.to_str().unwrap(), "--reset"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote default card styles"));

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&styles_path).unwrap()).unwrap();
    let bundled: serde_json::Value =
        serde_json::from_str(include_str!("../config/card-styles-default.json")).unwrap();
    assert_eq!(written, bundled);
}

#[test]
fn test_print_round_trips_a_styles_file() {
    let dir = tempfile::tempdir().unwrap();
    let styles_path = dir.path().join("custom.json");

    std::fs::write(
        &styles_path,
        r#"{ "clockCard": { "order": 1, "offsetX": -40, "offsetY": null, "enabled": true } }"#,
    )
    .unwrap();

    let output = cmd()
        .args(["--styles", styles_path.to_str().unwrap(), "--print"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let printed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(printed["clockCard"]["order"], 1);
    assert_eq!(printed["clockCard"]["offsetX"], -40);
    assert_eq!(printed["clockCard"]["offsetY"], serde_json::Value::Null);
}

#[test]
fn test_styles_path_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let styles_path = dir.path().join("from-config.json");
    let config_path = dir.path().join("homecard.toml");

    std::fs::write(
        &styles_path,
        r#"{ "navCard": { "width": 480, "height": 64, "order": 3, "offsetX": null, "offsetY": null } }"#,
    )
    .unwrap();
    std::fs::write(
        &config_path,
        format!("[styles]\npath = {:?}\n", styles_path.to_str().unwrap()),
    )
    .unwrap();

    cmd()
        .args(["--config", config_path.to_str().unwrap(), "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("navCard"))
        .stdout(predicate::str::contains("\"width\": 480"));
}

#[test]
fn test_unreadable_styles_file_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let styles_path = dir.path().join("broken.json");
    std::fs::write(&styles_path, "{ not json").unwrap();

    cmd()
        .args(["--styles", styles_path.to_str().unwrap(), "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}
