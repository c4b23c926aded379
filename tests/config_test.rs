//! Tests for loading configuration files.

use std::io::Write;
use strictly_tictactoe::{AppConfig, Labels, Locale};
use tempfile::{NamedTempFile, tempdir};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "locale = \"de\"\nplayer_a_label = \"Kreuz\"\nplayer_b_label = \"Kreis\"\nlog_file = \"game.log\""
    )
    .unwrap();

    let config = AppConfig::load_or_default(file.path()).unwrap();
    assert_eq!(*config.locale(), Locale::De);
    assert_eq!(
        config.labels(),
        Labels::new("Kreuz".to_string(), "Kreis".to_string())
    );
    assert_eq!(config.log_file().to_str(), Some("game.log"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "locale = [").unwrap();

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_unknown_key_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "board_size = 4").unwrap();

    assert!(AppConfig::load_or_default(file.path()).is_err());
}
