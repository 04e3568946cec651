//! Tests for configuration loading and defaults.

use std::io::Write;

use tempfile::NamedTempFile;

use greeter::config::{
    AppConfig, ConfigError, DEFAULT_HOST, DEFAULT_LOG_FORMAT, DEFAULT_PORT,
};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let config = AppConfig::load("does/not/exist.toml").expect("defaults");

    assert_eq!(config.http.host, DEFAULT_HOST);
    assert_eq!(config.http.port, DEFAULT_PORT);
    assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
}

#[test]
fn empty_file_uses_defaults() {
    let file = write_config("");

    let config = AppConfig::load(file.path()).expect("load");

    assert_eq!(config.http.host, DEFAULT_HOST);
    assert_eq!(config.http.port, DEFAULT_PORT);
    assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
}

#[test]
fn full_file_overrides_defaults() {
    let file = write_config(
        r#"
[http]
host = "127.0.0.1"
port = 8080

[logging]
format = "json"
"#,
    );

    let config = AppConfig::load(file.path()).expect("load");

    assert_eq!(config.http.host, "127.0.0.1");
    assert_eq!(config.http.port, 8080);
    assert_eq!(config.logging.format, "json");
}

#[test]
fn partial_file_keeps_remaining_defaults() {
    let file = write_config(
        r#"
[http]
port = 8080
"#,
    );

    let config = AppConfig::load(file.path()).expect("load");

    assert_eq!(config.http.host, DEFAULT_HOST);
    assert_eq!(config.http.port, 8080);
    assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
}

#[test]
fn invalid_toml_is_rejected() {
    let file = write_config("[http\nport = ");

    let err = AppConfig::load(file.path()).expect_err("parse should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}
