//! Asset rule resolver
//!
//! Given an asset path, the resolver picks the first matching rule and
//! computes the asset's output path for the active build mode. `resolve` is
//! pure: no file access, no environment lookups. `resolve_file` is the host
//! entry point; it streams the file into the hasher, and only for matched
//! assets in production. The mode, rule table and hasher are fixed when the
//! resolver is built, so one resolver can be shared by any number of threads
//! during a scan.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::hash::{self, Blake3Hasher, ContentHasher};
use crate::mode::Mode;
use crate::rules::{Category, RuleMatch, RuleSet};

pub mod template;

pub use template::{AssetName, DEFAULT_ASSETS_DIR, OutputTemplate};

/// An asset with its matched rule and computed output location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAsset {
    pub input_path: PathBuf,
    /// 1-based position of the matched rule in the table
    pub rule_index: usize,
    pub category: Category,
    pub chain: Vec<String>,
    pub output_path: String,
}

/// Outcome of resolving one asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(ResolvedAsset),
    /// No rule matched; the host applies its passthrough policy
    Unmatched { input_path: PathBuf },
}

impl Resolution {
    pub fn input_path(&self) -> &Path {
        match self {
            Resolution::Resolved(asset) => &asset.input_path,
            Resolution::Unmatched { input_path } => input_path,
        }
    }

    pub fn as_resolved(&self) -> Option<&ResolvedAsset> {
        match self {
            Resolution::Resolved(asset) => Some(asset),
            Resolution::Unmatched { .. } => None,
        }
    }

    pub fn is_unmatched(&self) -> bool {
        matches!(self, Resolution::Unmatched { .. })
    }
}

/// Resolver bound to one rule table, mode and hasher for a build run
pub struct Resolver {
    rules: RuleSet,
    mode: Mode,
    hasher: Box<dyn ContentHasher>,
    assets_dir: String,
}

impl Resolver {
    pub fn new(rules: RuleSet, mode: Mode, hasher: impl ContentHasher + 'static) -> Self {
        Self {
            rules,
            mode,
            hasher: Box::new(hasher),
            assets_dir: DEFAULT_ASSETS_DIR.to_string(),
        }
    }

    /// Resolver over the built-in rules with the default BLAKE3 hasher
    pub fn builtin(mode: Mode) -> Self {
        Self::new(RuleSet::builtin(), mode, Blake3Hasher::default())
    }

    /// Emit assets under `dir` instead of `assets`
    pub fn with_assets_dir(mut self, dir: impl Into<String>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Resolve an asset in the resolver's mode.
    ///
    /// `contents` feeds the content hash and is ignored in development.
    pub fn resolve(&self, path: &Path, contents: &[u8]) -> Resolution {
        self.resolve_with_mode(path, self.mode, contents)
    }

    /// Resolve an asset in an explicit mode
    pub fn resolve_with_mode(&self, path: &Path, mode: Mode, contents: &[u8]) -> Resolution {
        let Some(found) = self.rules.find(path) else {
            return unmatched(path);
        };
        self.resolved(path, mode, &found, || self.hasher.hash(contents))
    }

    /// Resolve an asset whose contents live at `source`.
    ///
    /// `path` is matched against the rules; `source` is only read for a
    /// matched asset in production, so unmatched or development assets never
    /// touch the file system.
    pub fn resolve_file(&self, path: &Path, source: &Path) -> Result<Resolution> {
        let Some(found) = self.rules.find(path) else {
            return Ok(unmatched(path));
        };

        let token = match OutputTemplate::for_mode(self.mode) {
            OutputTemplate::Hashed => hash::hash_file(self.hasher.as_ref(), source)?,
            OutputTemplate::Stable => String::new(),
        };
        Ok(self.resolved(path, self.mode, &found, || token))
    }

    fn resolved(
        &self,
        path: &Path,
        mode: Mode,
        found: &RuleMatch<'_>,
        hash: impl FnOnce() -> String,
    ) -> Resolution {
        let category = found.rule.category;
        let output_path = OutputTemplate::for_mode(mode).render(
            &self.assets_dir,
            category,
            &AssetName::from_path(path),
            hash,
        );

        tracing::trace!(
            path = %path.display(),
            rule = found.index,
            output = output_path.as_str(),
            "resolved asset"
        );

        Resolution::Resolved(ResolvedAsset {
            input_path: path.to_path_buf(),
            rule_index: found.index,
            category,
            chain: found.rule.chain.clone(),
            output_path,
        })
    }
}

fn unmatched(path: &Path) -> Resolution {
    tracing::trace!(path = %path.display(), "no rule matched");
    Resolution::Unmatched {
        input_path: path.to_path_buf(),
    }
}
