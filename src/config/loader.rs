//! Configuration loading and layering
//!
//! Sources, later ones overriding earlier ones key by key:
//! 1. Built-in defaults
//! 2. Global `assetplan.yaml` from the user config directory (if exists)
//! 3. Project `assetplan.yaml` (if exists)

use std::fs;
use std::path::{Path, PathBuf};

use super::{CONFIG_FILE, ConfigFile, PipelineConfig};
use crate::error::{self, Result};

/// Environment variable overriding the global config directory
pub const CONFIG_DIR_ENV: &str = "ASSETPLAN_CONFIG_DIR";

/// Pipeline configuration loader
pub struct ConfigLoader {
    /// Project root directory
    project_root: PathBuf,
    /// Directory holding the global config file
    global_dir: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader using the default global config directory
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            global_dir: default_global_dir(),
        }
    }

    /// Override the global config directory (`None` disables it)
    pub fn with_global_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.global_dir = dir;
        self
    }

    pub fn load(&self) -> Result<PipelineConfig> {
        let mut file = ConfigFile::default();

        if let Some(global) = self.load_global()? {
            file = global.merged_over(file);
        }

        if let Some(project) = read_config_file(&self.project_root.join(CONFIG_FILE))? {
            file = project.merged_over(file);
        }

        Ok(PipelineConfig::from_file(file, &self.project_root))
    }

    fn load_global(&self) -> Result<Option<ConfigFile>> {
        let Some(dir) = &self.global_dir else {
            return Ok(None);
        };
        read_config_file(&dir.join(CONFIG_FILE))
    }
}

fn default_global_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|dir| dir.join("assetplan"))
}

fn read_config_file(path: &Path) -> Result<Option<ConfigFile>> {
    if !path.exists() {
        return Ok(None);
    }

    tracing::debug!(path = %path.display(), "loading config file");

    let content = fs::read_to_string(path)
        .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;

    ConfigFile::from_yaml(&content, &path.display().to_string()).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Category, default_rules};
    use tempfile::TempDir;

    fn write(dir: &Path, content: &str) {
        fs::write(dir.join(CONFIG_FILE), content).unwrap();
    }

    #[test]
    fn test_load_without_files() {
        let project = TempDir::new().unwrap();
        let config = ConfigLoader::new(project.path())
            .with_global_dir(None)
            .load()
            .unwrap();

        assert_eq!(config.rules, default_rules());
        assert_eq!(config.source_dir, project.path().join("src"));
    }

    #[test]
    fn test_project_overrides_global() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        write(global.path(), "mode: production\nassets_dir: cdn\nhash_length: 10\n");
        write(project.path(), "assets_dir: static\n");

        let config = ConfigLoader::new(project.path())
            .with_global_dir(Some(global.path().to_path_buf()))
            .load()
            .unwrap();

        assert_eq!(config.mode.as_deref(), Some("production"));
        assert_eq!(config.assets_dir, "static");
        assert_eq!(config.hash_length, 10);
    }

    #[test]
    fn test_project_rules_replace_builtin_table() {
        let project = TempDir::new().unwrap();
        write(
            project.path(),
            "rules:\n  - category: images\n    extensions: [avif]\n",
        );

        let config = ConfigLoader::new(project.path())
            .with_global_dir(None)
            .load()
            .unwrap();

        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].category, Category::Images);
        assert_eq!(config.rules[0].extensions, vec!["avif"]);
    }

    #[test]
    fn test_invalid_yaml_reports_path() {
        let project = TempDir::new().unwrap();
        write(project.path(), "rules: [unclosed\n");

        let err = ConfigLoader::new(project.path())
            .with_global_dir(None)
            .load()
            .unwrap_err();

        assert!(err.to_string().contains(CONFIG_FILE));
    }

    #[test]
    fn test_missing_global_dir_is_ignored() {
        let project = TempDir::new().unwrap();
        let config = ConfigLoader::new(project.path())
            .with_global_dir(Some(project.path().join("does-not-exist")))
            .load();
        assert!(config.is_ok());
    }
}
