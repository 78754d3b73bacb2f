//! Common test utilities for assetplan integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway project directory
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Empty directory standing in for the user config directory
    #[allow(dead_code)]
    pub global_config: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create a new empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let global_config = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self {
            temp,
            global_config,
            path,
        }
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// assetplan command running inside this project, isolated from the
    /// caller's environment
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("assetplan").expect("binary should build");
        cmd.current_dir(&self.path)
            .env("ASSETPLAN_CONFIG_DIR", self.global_config.path())
            .env_remove("NODE_ENV")
            .env_remove("ASSETPLAN_PROJECT")
            .env_remove("RUST_LOG");
        cmd
    }
}
