//! Output path templates

use std::path::Path;

use crate::mode::Mode;
use crate::rules::Category;

/// Default directory all emitted assets live under
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Naming scheme for emitted assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTemplate {
    /// `<dir>/<category>/<base><ext>`
    Stable,
    /// `<dir>/<category>/<base>.<hash><ext>`
    Hashed,
}

impl OutputTemplate {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Development => OutputTemplate::Stable,
            Mode::Production => OutputTemplate::Hashed,
        }
    }

    /// Render the output path for an asset.
    ///
    /// `hash` is only called for the hashed template.
    pub fn render(
        self,
        assets_dir: &str,
        category: Category,
        name: &AssetName,
        hash: impl FnOnce() -> String,
    ) -> String {
        let file_name = match self {
            OutputTemplate::Stable => format!("{}{}", name.base, name.extension),
            OutputTemplate::Hashed => format!("{}.{}{}", name.base, hash(), name.extension),
        };

        let dir = assets_dir.trim_end_matches('/');
        if dir.is_empty() {
            format!("{category}/{file_name}")
        } else {
            format!("{dir}/{category}/{file_name}")
        }
    }
}

/// File name of an asset split at its final extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetName {
    /// Everything before the final extension
    pub base: String,
    /// The final extension with its dot, as written, or empty
    pub extension: String,
}

impl AssetName {
    pub fn from_path(path: &Path) -> Self {
        let base = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        Self { base, extension }
    }
}
