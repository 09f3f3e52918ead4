use std::fs;

use roster::settings::Settings;
use tempfile::tempdir;

#[test]
fn defaults_apply_without_a_config_file() {
    let dir = tempdir().expect("temp dir");
    let settings = Settings::load_from(dir.path()).expect("load settings");
    assert_eq!(settings.greeting, "Hello");
}

#[test]
fn a_config_file_overrides_the_default_greeting() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("roster.toml"), "greeting = \"Howdy\"\n").expect("write config");
    let settings = Settings::load_from(dir.path()).expect("load settings");
    assert_eq!(settings.greeting, "Howdy");
}

// Environment variables (ROSTER_GREETING) are merged on top of the file
// source. Setting them from within a test would leak into parallel tests,
// so that layer is exercised in actual usage rather than here.

#[test]
fn built_in_default_matches_the_demo_greeting() {
    assert_eq!(Settings::default().greeting, "Hello");
}
