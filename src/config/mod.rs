//! Configuration file handling
//!
//! `assetplan.yaml` lists every recognised option explicitly. Unknown keys
//! are rejected so that a typo never silently falls back to a default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};
use crate::hash::{Blake3Hasher, DEFAULT_HASH_LENGTH};
use crate::mode::Mode;
use crate::resolver::{DEFAULT_ASSETS_DIR, Resolver};
use crate::rules::{Rule, RuleSet, default_rules};

pub mod loader;

pub use loader::ConfigLoader;

/// Config filename
pub const CONFIG_FILE: &str = "assetplan.yaml";

/// Default directory scanned for assets, relative to the project root
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Contents of one `assetplan.yaml` file
///
/// Every field is optional so that a project file can override a global
/// one key by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Build mode (`development` or `production`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Directory scanned for assets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_dir: Option<PathBuf>,

    /// Prefix of every output path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<String>,

    /// Hex characters kept from the content hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash_length: Option<usize>,

    /// Globs (relative to the source directory) skipped while scanning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,

    /// Rule table; replaces the built-in table when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,
}

impl ConfigFile {
    /// Parse a config file from YAML. An empty document is an empty config.
    pub fn from_yaml(yaml: &str, path: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(yaml).map_err(|e| error::config::parse_failed(path, e.to_string()))
    }

    /// Layer `self` over `base`: values set here win
    pub fn merged_over(self, base: ConfigFile) -> ConfigFile {
        ConfigFile {
            mode: self.mode.or(base.mode),
            source_dir: self.source_dir.or(base.source_dir),
            assets_dir: self.assets_dir.or(base.assets_dir),
            hash_length: self.hash_length.or(base.hash_length),
            exclude: self.exclude.or(base.exclude),
            rules: self.rules.or(base.rules),
        }
    }
}

/// Fully resolved configuration for one build run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Mode string from the config files, if any
    pub mode: Option<String>,
    pub source_dir: PathBuf,
    pub assets_dir: String,
    pub hash_length: usize,
    pub exclude: Vec<String>,
    pub rules: Vec<Rule>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::from_file(ConfigFile::default(), Path::new("."))
    }
}

impl PipelineConfig {
    /// Fill in defaults; `source_dir` is made relative to `project_root`
    pub fn from_file(file: ConfigFile, project_root: &Path) -> Self {
        let source_dir = file
            .source_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR));

        Self {
            mode: file.mode,
            source_dir: project_root.join(source_dir),
            assets_dir: file
                .assets_dir
                .unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_string()),
            hash_length: file.hash_length.unwrap_or(DEFAULT_HASH_LENGTH),
            exclude: file.exclude.unwrap_or_default(),
            rules: file.rules.unwrap_or_else(default_rules),
        }
    }

    /// Validate the rule table and hash settings and build a resolver
    pub fn build_resolver(&self, mode: Mode) -> Result<Resolver> {
        let rules = RuleSet::new(self.rules.clone())?;
        let hasher = Blake3Hasher::new(self.hash_length)?;
        Ok(Resolver::new(rules, mode, hasher).with_assets_dir(self.assets_dir.clone()))
    }
}
