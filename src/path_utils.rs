//! Cross-platform path utilities
//!
//! Rule patterns, exclude globs and manifest keys all use forward slashes,
//! whatever the host platform.

use std::path::Path;

/// Convert a path to forward slashes
///
/// # Examples
///
/// ```ignore
/// let forward = to_forward_slashes(Path::new("images\\logo.png"));
/// assert_eq!(forward, "images/logo.png");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
