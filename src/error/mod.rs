//! Error types and handling for assetplan
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Resolution itself never fails: an unrecognised asset is an `Unmatched`
//! result, not an error. The errors here belong to the host side, i.e.
//! configuration loading, rule validation and file access.
//!
//! Sub-modules provide convenience constructors per error domain:
//! - [`config`]: Configuration errors
//! - [`rules`]: Rule table errors
//! - [`fs`]: File system and emission errors

pub mod config;
pub mod fs;
pub mod rules;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for assetplan operations
#[derive(Error, Diagnostic, Debug)]
pub enum AssetplanError {
    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(assetplan::config::parse_failed),
        help("Check the YAML syntax and the recognised keys in assetplan.yaml")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(assetplan::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // Rule table errors
    #[error("Rule #{index} ({category}) has no extensions")]
    #[diagnostic(
        code(assetplan::rules::empty_matcher),
        help("List at least one extension, e.g. `extensions: [png, jpg]`")
    )]
    EmptyMatcher { index: usize, category: String },

    #[error("Rule #{index} ({category}) must set exactly one of `extensions` or `pattern`")]
    #[diagnostic(code(assetplan::rules::ambiguous_matcher))]
    AmbiguousMatcher { index: usize, category: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(assetplan::rules::invalid_pattern),
        help("Patterns use glob syntax, e.g. `**/*.module.css`")
    )]
    InvalidPattern { pattern: String, reason: String },

    #[error("Hash length {length} is out of range")]
    #[diagnostic(
        code(assetplan::rules::invalid_hash_length),
        help("Use a hash length between 4 and 64 hex characters")
    )]
    InvalidHashLength { length: usize },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(assetplan::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(assetplan::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(assetplan::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Assets '{first}' and '{second}' would both be emitted as {output}")]
    #[diagnostic(
        code(assetplan::fs::output_conflict),
        help("Rename one of the inputs, or plan in production mode so names carry a content hash")
    )]
    OutputConflict {
        output: String,
        first: String,
        second: String,
    },

    #[error("Failed to serialize manifest: {reason}")]
    #[diagnostic(code(assetplan::fs::serialize_failed))]
    SerializeFailed { reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(assetplan::fs::io_error))]
    IoError { message: String },

    // CLI errors
    #[error("Unknown shell: {name}")]
    #[diagnostic(
        code(assetplan::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { name: String },
}

impl From<std::io::Error> for AssetplanError {
    fn from(err: std::io::Error) -> Self {
        AssetplanError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AssetplanError {
    fn from(err: serde_yaml::Error) -> Self {
        AssetplanError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AssetplanError {
    fn from(err: serde_json::Error) -> Self {
        AssetplanError::SerializeFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AssetplanError>;

#[cfg(test)]
mod tests;
