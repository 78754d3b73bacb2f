//! Source tree scanning

use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{self, Result};
use crate::path_utils;

/// List every file under `source_dir`, relative to it and sorted.
///
/// Entries whose relative path matches one of the `exclude` globs are
/// skipped; an excluded directory is not descended into.
pub fn scan(source_dir: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    if !source_dir.is_dir() {
        return Err(error::fs::not_found(source_dir));
    }

    let excludes = exclude
        .iter()
        .map(|pattern| {
            Glob::new(pattern)
                .map(Glob::into_owned)
                .map_err(|e| error::rules::invalid_pattern(pattern.as_str(), e.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    let is_excluded = |relative: &Path| {
        let normalized = path_utils::to_forward_slashes(relative);
        let candidate = CandidatePath::from(normalized.as_str());
        excludes
            .iter()
            .any(|glob| glob.matched(&candidate).is_some())
    };

    let mut files: Vec<PathBuf> = WalkDir::new(source_dir)
        .into_iter()
        .filter_entry(|entry| {
            let relative = entry.path().strip_prefix(source_dir).unwrap_or(entry.path());
            relative.as_os_str().is_empty() || !is_excluded(relative)
        })
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(source_dir)
                .ok()
                .map(Path::to_path_buf)
        })
        .collect();

    files.sort();
    tracing::debug!(
        source_dir = %source_dir.display(),
        files = files.len(),
        "scanned source tree"
    );
    Ok(files)
}
