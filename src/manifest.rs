//! Emission manifest
//!
//! The manifest is the hand-off to the host bundler: for every scanned
//! input it records the transform chain and the output path, plus the
//! inputs no rule matched. Two different inputs may not claim one output
//! path unless the path carries a content hash, in which case their
//! contents are the same and the host emits the file once.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{self, Result};
use crate::mode::{BuildProfile, Mode};
use crate::path_utils;
use crate::resolver::Resolution;
use crate::rules::Category;

/// Host emission step consuming resolved assets
pub trait AssetSink {
    fn emit(&mut self, resolution: &Resolution) -> Result<()>;
}

/// Planned emission of one asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    pub category: Category,
    pub chain: Vec<String>,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub mode: Mode,
    pub profile: BuildProfile,
    /// Keyed by input path, forward slashes
    pub assets: BTreeMap<String, ManifestEntry>,
    /// Inputs left to the host's passthrough policy
    pub unmatched: Vec<String>,
    /// Output path to the first input planned there
    #[serde(skip)]
    claimed: BTreeMap<String, String>,
}

impl Manifest {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            profile: mode.profile(),
            assets: BTreeMap::new(),
            unmatched: Vec::new(),
            claimed: BTreeMap::new(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the manifest as JSON.
    ///
    /// Writes to a sibling temp file first and renames it into place, so a
    /// reader never sees a partial manifest.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_json()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| error::fs::write_failed(parent, &e))?;
        }

        let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content).map_err(|e| error::fs::write_failed(&tmp_path, &e))?;
        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(error::fs::write_failed(path, &e));
        }
        Ok(())
    }

    /// Record `input` as the owner of `output`, rejecting a second input
    fn claim(&mut self, output: &str, input: &str) -> Result<()> {
        match self.claimed.get(output) {
            Some(first) if first != input => {
                if self.mode.is_production() {
                    tracing::debug!(
                        output,
                        first = first.as_str(),
                        input,
                        "identical content shares an output"
                    );
                    return Ok(());
                }
                Err(error::fs::output_conflict(output, first, input))
            }
            Some(_) => Ok(()),
            None => {
                self.claimed.insert(output.to_string(), input.to_string());
                Ok(())
            }
        }
    }
}

impl AssetSink for Manifest {
    fn emit(&mut self, resolution: &Resolution) -> Result<()> {
        let key = path_utils::to_forward_slashes(resolution.input_path());

        match resolution {
            Resolution::Resolved(asset) => {
                self.claim(&asset.output_path, &key)?;
                self.assets.insert(
                    key,
                    ManifestEntry {
                        category: asset.category,
                        chain: asset.chain.clone(),
                        output: asset.output_path.clone(),
                    },
                );
            }
            Resolution::Unmatched { .. } => self.unmatched.push(key),
        }
        Ok(())
    }
}
