//! Tests for configuration loading.

use std::io::Write;

use huecast_extract::{RoleFilter, TokenAlphabet};
use huecast_server::config::{default_vocabulary, load_config, ConfigError};
use huecast_types::SpeakerRole;

#[test]
fn no_path_yields_defaults_with_stock_vocabulary() {
    let config = load_config(None).expect("defaults should load");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host.to_string(), "127.0.0.1");
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);
    assert_eq!(config.extractor.vocabulary, default_vocabulary());
    assert_eq!(
        config.extractor.role_filter,
        RoleFilter::Only(SpeakerRole::RemoteAgent)
    );
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let config =
        load_config(Some("/definitely/not/a/real/config.toml")).expect("missing file is not fatal");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.extractor.vocabulary, default_vocabulary());
}

#[test]
fn full_config_file_parses() {
    let mut file = tempfile::NamedTempFile::new().expect("should create temp file");
    write!(
        file,
        r#"
        [server]
        host = "0.0.0.0"
        port = 8080

        [extractor]
        vocabulary = ["crimson", "teal"]
        role_filter = "any"
        alphabet = "alphanumeric"
        closed_capacity = 16

        [logging]
        level = "debug"
        json = true
    "#
    )
    .expect("should write temp file");

    let config = load_config(file.path().to_str()).expect("config should parse");
    assert_eq!(config.server.host.to_string(), "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.extractor.vocabulary, vec!["crimson", "teal"]);
    assert_eq!(config.extractor.role_filter, RoleFilter::Any);
    assert_eq!(config.extractor.alphabet, TokenAlphabet::Alphanumeric);
    assert_eq!(config.extractor.closed_capacity, 16);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
}

#[test]
fn partial_config_keeps_section_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("should create temp file");
    write!(
        file,
        r#"
        [server]
        port = 9090
    "#
    )
    .expect("should write temp file");

    let config = load_config(file.path().to_str()).expect("config should parse");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host.to_string(), "127.0.0.1");
    // Unconfigured vocabulary falls back to the stock color set.
    assert_eq!(config.extractor.vocabulary, default_vocabulary());
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().expect("should create temp file");
    write!(file, "this is not toml [[[").expect("should write temp file");

    let err = load_config(file.path().to_str()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn configured_vocabulary_builds_a_working_extractor() {
    let mut file = tempfile::NamedTempFile::new().expect("should create temp file");
    write!(
        file,
        r#"
        [extractor]
        vocabulary = ["magenta"]
    "#
    )
    .expect("should write temp file");

    let config = load_config(file.path().to_str()).expect("config should parse");
    let mut extractor =
        huecast_extract::SignalExtractor::new(config.extractor).expect("extractor should build");

    let segment = huecast_types::TranscriptSegment {
        speaker_role: SpeakerRole::RemoteAgent,
        utterance_key: huecast_types::UtteranceKey::new(
            huecast_types::SessionId::new("sess-1"),
            "u1",
        ),
        text: "go magenta".to_string(),
        is_final: false,
    };
    let result = extractor.ingest(&segment).expect("should match");
    assert_eq!(result.label, "magenta");
}
