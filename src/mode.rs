//! Build mode selection
//!
//! The mode is chosen once, before any resolution happens, and handed to the
//! resolver as a value. Unknown or missing mode strings fall back to
//! development naming.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target environment of a build run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Stable, human-readable output names
    #[default]
    Development,
    /// Content-hashed output names
    Production,
}

impl Mode {
    /// Parse a recognised mode string (`development` or `production`).
    ///
    /// Matching ignores case and surrounding whitespace. Returns `None` for
    /// anything else, including the empty string.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" => Some(Mode::Development),
            "production" => Some(Mode::Production),
            _ => None,
        }
    }

    /// Select the mode from the first value that is present.
    ///
    /// An unrecognised value falls back to development and is logged.
    pub fn select<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        let Some(value) = candidates.into_iter().flatten().next() else {
            tracing::debug!("no build mode given, using development");
            return Mode::Development;
        };

        Mode::parse(value).unwrap_or_else(|| {
            tracing::warn!(
                value,
                "unrecognised build mode, falling back to development"
            );
            Mode::Development
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }

    pub fn is_production(self) -> bool {
        self == Mode::Production
    }

    /// Optimisation switches that follow from this mode
    pub fn profile(self) -> BuildProfile {
        match self {
            Mode::Development => BuildProfile {
                minify: false,
                source_maps: true,
                split_chunks: ChunkSplitting::All,
            },
            Mode::Production => BuildProfile {
                minify: true,
                source_maps: false,
                split_chunks: ChunkSplitting::All,
            },
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which chunks the host bundler should split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSplitting {
    All,
}

/// Mode-dependent settings passed on to the host bundler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildProfile {
    /// Run the script and style minimizers
    pub minify: bool,
    /// Emit source maps
    pub source_maps: bool,
    pub split_chunks: ChunkSplitting,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognised_values() {
        assert_eq!(Mode::parse("development"), Some(Mode::Development));
        assert_eq!(Mode::parse("production"), Some(Mode::Production));
        assert_eq!(Mode::parse(" Production "), Some(Mode::Production));
        assert_eq!(Mode::parse("DEVELOPMENT"), Some(Mode::Development));
    }

    #[test]
    fn test_parse_unrecognised_values() {
        assert_eq!(Mode::parse(""), None);
        assert_eq!(Mode::parse("staging"), None);
        assert_eq!(Mode::parse("prod"), None);
    }

    #[test]
    fn test_select_falls_back_to_development() {
        assert_eq!(Mode::select([None, None]), Mode::Development);
        assert_eq!(Mode::select([Some("staging")]), Mode::Development);
        assert_eq!(Mode::select([Some("")]), Mode::Development);
    }

    #[test]
    fn test_select_uses_first_present_value() {
        assert_eq!(
            Mode::select([None, Some("production"), Some("development")]),
            Mode::Production
        );
        // A present but unknown value wins over later candidates
        assert_eq!(
            Mode::select([Some("test"), Some("production")]),
            Mode::Development
        );
    }

    #[test]
    fn test_profile() {
        let dev = Mode::Development.profile();
        assert!(!dev.minify);
        assert!(dev.source_maps);

        let prod = Mode::Production.profile();
        assert!(prod.minify);
        assert!(!prod.source_maps);
        assert_eq!(prod.split_chunks, ChunkSplitting::All);
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(Mode::Production.to_string(), "production");
        let json = serde_json::to_string(&Mode::Development).unwrap();
        assert_eq!(json, "\"development\"");
        let mode: Mode = serde_yaml::from_str("production").unwrap();
        assert_eq!(mode, Mode::Production);
    }
}
