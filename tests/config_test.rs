//! Tests for loading the front-end configuration from disk.

use noughts::{AppConfig, Player};
use std::io::Write;

#[test]
fn test_load_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "x_mark = \"✕\"\no_mark = \"◯\"\nbell = false").unwrap();

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.mark(Player::X), "✕");
    assert_eq!(config.mark(Player::O), "◯");
    assert!(!*config.bell());
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_load_malformed_file_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "bell = \"loud\"").unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}
