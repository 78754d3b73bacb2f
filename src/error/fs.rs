//! File system errors

use std::path::Path;

use super::AssetplanError;

/// Creates a file not found error
pub fn not_found(path: &Path) -> AssetplanError {
    AssetplanError::FileNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: &Path, err: &std::io::Error) -> AssetplanError {
    if err.kind() == std::io::ErrorKind::NotFound {
        return not_found(path);
    }
    AssetplanError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, err: &std::io::Error) -> AssetplanError {
    AssetplanError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an output conflict error for two inputs planned to one path
pub fn output_conflict(output: &str, first: &str, second: &str) -> AssetplanError {
    AssetplanError::OutputConflict {
        output: output.to_string(),
        first: first.to_string(),
        second: second.to_string(),
    }
}
