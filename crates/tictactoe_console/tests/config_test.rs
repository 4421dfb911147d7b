//! Loading configuration files from disk.

use std::io::Write;
use tictactoe_console::AppConfig;
use tictactoe_engine::GameMode;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
log_filter = "tictactoe_engine=debug"

[session]
ai_name = "Deep Thought"
show_instructions = false
mode = "human"
"#
    )
    .unwrap();

    let (config, from_file) = AppConfig::load(Some(file.path())).unwrap();
    assert!(from_file);
    assert_eq!(config.log_filter(), "tictactoe_engine=debug");
    assert_eq!(config.session().ai_name(), "Deep Thought");
    assert!(!*config.session().show_instructions());
    assert_eq!(*config.session().mode(), Some(GameMode::VsHuman));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (config, from_file) = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert!(!from_file);
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_requested_file_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let typo = dir.path().join("tictactoe-typo.toml");

    let err = AppConfig::load(Some(typo.as_path())).unwrap_err();
    assert!(err.message.starts_with("Config file not found"));
    assert!(err.message.contains("tictactoe-typo.toml"));
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[session\nai_name = ").unwrap();

    let err = AppConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.file.ends_with("config.rs"));
}
