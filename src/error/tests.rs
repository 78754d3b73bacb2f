//! Error type tests
//!
//! Tests for AssetplanError enum and its conversions.

#![allow(clippy::expect_used)]

use std::path::Path;

use crate::error::AssetplanError;
use crate::error::config::{parse_failed, read_failed};
use crate::error::fs::{
    not_found, output_conflict, read_failed as file_read_failed, write_failed,
};
use crate::error::rules::{ambiguous_matcher, empty_matcher, invalid_pattern};
use miette::Diagnostic;

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_display() {
    let err = AssetplanError::FileNotFound {
        path: "src/logo.png".to_string(),
    };
    assert_eq!(err.to_string(), "File not found: src/logo.png");
}

#[test]
fn test_error_code() {
    let err = empty_matcher(2, "images");
    assert_eq!(
        err.code()
            .map(|c: Box<dyn std::fmt::Display>| c.to_string()),
        Some("assetplan::rules::empty_matcher".to_string())
    );
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: AssetplanError = io_err.into();
    assert!(matches!(err, AssetplanError::IoError { .. }));
}

#[test]
fn test_yaml_error_conversion() {
    let yaml_str = "invalid: yaml: content: [unclosed";
    let parse_result: std::result::Result<serde_yaml::Value, _> = serde_yaml::from_str(yaml_str);
    let yaml_err = parse_result.expect_err("YAML parsing should have failed");
    let err: AssetplanError = yaml_err.into();
    assert!(matches!(err, AssetplanError::ConfigParseFailed { .. }));
}

#[test]
fn test_json_error_conversion() {
    let parse_result: std::result::Result<serde_json::Value, _> =
        serde_json::from_str("invalid json content");
    let json_err = parse_result.expect_err("JSON parsing should have failed");
    let err: AssetplanError = json_err.into();
    assert!(matches!(err, AssetplanError::SerializeFailed { .. }));
    assert!(err.to_string().starts_with("Failed to serialize manifest"));
    assert!(!err.to_string().contains("configuration"));
}

test_error_contains!(
    test_ambiguous_matcher_message,
    ambiguous_matcher(3, "styles"),
    "Rule #3",
    "styles",
    "exactly one of"
);

test_error_contains!(
    test_invalid_pattern_message,
    invalid_pattern("**/[", "unclosed class"),
    "Invalid glob pattern",
    "**/["
);

test_error_contains!(
    test_hash_length_message,
    AssetplanError::InvalidHashLength { length: 99 },
    "99",
    "out of range"
);

#[test]
fn test_config_constructors() {
    assert!(matches!(
        parse_failed("assetplan.yaml", "bad"),
        AssetplanError::ConfigParseFailed { .. }
    ));
    assert!(matches!(
        read_failed("assetplan.yaml", "denied"),
        AssetplanError::ConfigReadFailed { .. }
    ));
}

#[test]
fn test_file_read_failed_maps_not_found() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err = file_read_failed(Path::new("a.png"), &io_err);
    assert!(matches!(err, AssetplanError::FileNotFound { .. }));

    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err = file_read_failed(Path::new("a.png"), &io_err);
    assert!(matches!(err, AssetplanError::FileReadFailed { .. }));
}

#[test]
fn test_fs_constructors() {
    assert!(not_found(Path::new("x")).to_string().contains("File not found"));
    let io_err = std::io::Error::other("disk full");
    assert!(
        write_failed(Path::new("manifest.json"), &io_err)
            .to_string()
            .contains("Failed to write file")
    );
}

test_error_contains!(
    test_output_conflict_message,
    output_conflict("assets/images/logo.png", "a/logo.png", "b/logo.png"),
    "a/logo.png",
    "b/logo.png",
    "assets/images/logo.png"
);

#[test]
fn test_unknown_shell_code() {
    let err = AssetplanError::UnknownShell {
        name: "tcsh".to_string(),
    };
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("assetplan::cli::unknown_shell".to_string())
    );
}
