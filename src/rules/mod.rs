//! Asset rule definitions and matching
//!
//! This module handles:
//! - Rule definitions (Category, Rule)
//! - Startup validation and matcher compilation (via RuleSet)
//! - The built-in rule table (via defaults module)
//!
//! Rules are kept in declaration order and matched with a linear scan, so
//! the first matching rule always wins.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{self, Result};
use crate::path_utils;

pub mod defaults;

pub use defaults::default_rules;

/// Semantic bucket an asset is emitted into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Markup,
    Styles,
    Script,
    Images,
    Fonts,
    Video,
    Audio,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Markup => "markup",
            Category::Styles => "styles",
            Category::Script => "script",
            Category::Images => "images",
            Category::Fonts => "fonts",
            Category::Video => "video",
            Category::Audio => "audio",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule mapping a class of assets to a transform chain
///
/// Exactly one of `extensions` and `pattern` must be set. Extensions are
/// written without the leading dot and compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Bucket the matched assets are emitted into
    pub category: Category,

    /// File extensions this rule applies to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,

    /// Glob matched against the forward-slash form of the asset path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Ordered transform steps (loader names) applied to matched assets
    #[serde(default)]
    pub chain: Vec<String>,
}

impl Rule {
    /// Create a rule with no matcher and an empty chain
    pub fn new(category: Category) -> Self {
        Self {
            category,
            extensions: Vec::new(),
            pattern: None,
            chain: Vec::new(),
        }
    }

    /// Match by file extension
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions.extend(extensions.into_iter().map(Into::into));
        self
    }

    /// Match by glob pattern
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set the transform chain
    pub fn with_chain<I, S>(mut self, chain: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chain = chain.into_iter().map(Into::into).collect();
        self
    }

    /// Human-readable description of the matcher
    pub fn matcher_label(&self) -> String {
        match &self.pattern {
            Some(pattern) => pattern.clone(),
            None => self.extensions.join(", "),
        }
    }
}

#[derive(Debug)]
enum Matcher {
    Extensions(Vec<String>),
    Glob(Glob<'static>),
}

#[derive(Debug)]
struct CompiledRule {
    rule: Rule,
    matcher: Matcher,
}

/// A rule that matched an asset, with its 1-based position in the table
#[derive(Debug, Clone, Copy)]
pub struct RuleMatch<'a> {
    pub index: usize,
    pub rule: &'a Rule,
}

/// Validated, immutable, ordered rule table
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// Validate and compile a rule table.
    ///
    /// Extensions are normalised (leading dot stripped, lower-cased). A rule
    /// must have exactly one non-empty matcher and glob patterns must
    /// compile. Overlapping extension matchers are accepted and logged,
    /// since declaration order already decides between them.
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        let mut compiled = Vec::with_capacity(rules.len());

        for (offset, mut rule) in rules.into_iter().enumerate() {
            let index = offset + 1;
            let matcher = compile_matcher(index, &mut rule)?;
            compiled.push(CompiledRule { rule, matcher });
        }

        let set = Self { rules: compiled };
        set.warn_overlaps();
        Ok(set)
    }

    /// Rule set built from the built-in table
    pub fn builtin() -> Self {
        let rules = default_rules()
            .into_iter()
            .map(|rule| CompiledRule {
                matcher: Matcher::Extensions(rule.extensions.clone()),
                rule,
            })
            .collect();
        Self { rules }
    }

    /// All rules in declaration order
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().map(|compiled| &compiled.rule)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find the first rule matching `path`
    pub fn find(&self, path: &Path) -> Option<RuleMatch<'_>> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
        let normalized = path_utils::to_forward_slashes(path);
        let candidate = CandidatePath::from(normalized.as_str());

        self.rules
            .iter()
            .enumerate()
            .find(|(_, compiled)| match &compiled.matcher {
                Matcher::Extensions(extensions) => extension
                    .as_deref()
                    .is_some_and(|ext| extensions.iter().any(|e| e == ext)),
                Matcher::Glob(glob) => glob.matched(&candidate).is_some(),
            })
            .map(|(offset, compiled)| RuleMatch {
                index: offset + 1,
                rule: &compiled.rule,
            })
    }

    fn warn_overlaps(&self) {
        for (offset, compiled) in self.rules.iter().enumerate() {
            let Matcher::Extensions(extensions) = &compiled.matcher else {
                continue;
            };

            for ext in extensions {
                let earlier = self.rules[..offset].iter().position(|prior| {
                    matches!(&prior.matcher, Matcher::Extensions(prior_exts) if prior_exts.contains(ext))
                });

                if let Some(earlier) = earlier {
                    tracing::warn!(
                        extension = ext.as_str(),
                        rule = offset + 1,
                        shadowed_by = earlier + 1,
                        "extension is already matched by an earlier rule"
                    );
                }
            }
        }
    }
}

fn compile_matcher(index: usize, rule: &mut Rule) -> Result<Matcher> {
    let category = rule.category.as_str();

    match (&rule.pattern, rule.extensions.is_empty()) {
        (Some(_), false) => Err(error::rules::ambiguous_matcher(index, category)),
        (Some(pattern), true) => {
            let glob = Glob::new(pattern)
                .map(Glob::into_owned)
                .map_err(|e| error::rules::invalid_pattern(pattern.as_str(), e.to_string()))?;
            Ok(Matcher::Glob(glob))
        }
        (None, true) => Err(error::rules::empty_matcher(index, category)),
        (None, false) => {
            let mut normalized = Vec::with_capacity(rule.extensions.len());
            for ext in &rule.extensions {
                let ext = ext.trim().trim_start_matches('.').to_ascii_lowercase();
                if ext.is_empty() {
                    return Err(error::rules::empty_matcher(index, category));
                }
                if !normalized.contains(&ext) {
                    normalized.push(ext);
                }
            }
            rule.extensions.clone_from(&normalized);
            Ok(Matcher::Extensions(normalized))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetplanError;

    fn category_of(set: &RuleSet, path: &str) -> Option<Category> {
        set.find(Path::new(path)).map(|m| m.rule.category)
    }

    #[test]
    fn test_rule_builder() {
        let rule = Rule::new(Category::Styles)
            .with_extensions(["scss", "sass"])
            .with_chain(["css-loader", "sass-loader"]);

        assert_eq!(rule.category, Category::Styles);
        assert_eq!(rule.extensions, vec!["scss", "sass"]);
        assert_eq!(rule.pattern, None);
        assert_eq!(rule.chain, vec!["css-loader", "sass-loader"]);
        assert_eq!(rule.matcher_label(), "scss, sass");
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let set = RuleSet::builtin();
        assert_eq!(category_of(&set, "clip.MP4"), Some(Category::Video));
        assert_eq!(category_of(&set, "Logo.PnG"), Some(Category::Images));
    }

    #[test]
    fn test_find_uses_final_extension() {
        let set = RuleSet::builtin();
        assert_eq!(category_of(&set, "a.module.css"), Some(Category::Styles));
        assert_eq!(category_of(&set, "archive.css.gz"), None);
    }

    #[test]
    fn test_find_without_extension() {
        let set = RuleSet::builtin();
        assert_eq!(category_of(&set, "Makefile"), None);
        assert_eq!(category_of(&set, ".png"), None);
        assert_eq!(category_of(&set, "dir.png/README"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let set = RuleSet::new(vec![
            Rule::new(Category::Images).with_extensions(["svg"]),
            Rule::new(Category::Fonts).with_extensions(["svg", "woff"]),
        ])
        .unwrap();

        let found = set.find(Path::new("icons/arrow.svg")).unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.rule.category, Category::Images);
        assert_eq!(category_of(&set, "brand.woff"), Some(Category::Fonts));
    }

    #[test]
    fn test_glob_rule_precedes_extension_rule() {
        let set = RuleSet::new(vec![
            Rule::new(Category::Script).with_pattern("**/*.module.css"),
            Rule::new(Category::Styles).with_extensions(["css"]),
        ])
        .unwrap();

        assert_eq!(
            category_of(&set, "components/button.module.css"),
            Some(Category::Script)
        );
        assert_eq!(category_of(&set, "main.css"), Some(Category::Styles));
    }

    #[test]
    fn test_glob_matches_windows_separators() {
        let set =
            RuleSet::new(vec![Rule::new(Category::Images).with_pattern("icons/**")]).unwrap();
        assert_eq!(
            category_of(&set, "icons\\arrows\\left"),
            Some(Category::Images)
        );
    }

    #[test]
    fn test_extensions_are_normalized() {
        let set = RuleSet::new(vec![
            Rule::new(Category::Images).with_extensions([".PNG", " jpg ", "png"]),
        ])
        .unwrap();

        let rule = set.rules().next().unwrap();
        assert_eq!(rule.extensions, vec!["png", "jpg"]);
        assert_eq!(category_of(&set, "photo.JPG"), Some(Category::Images));
    }

    #[test]
    fn test_empty_matcher_rejected() {
        let result = RuleSet::new(vec![
            Rule::new(Category::Images).with_extensions(["png"]),
            Rule::new(Category::Fonts),
        ]);
        assert!(matches!(
            result,
            Err(AssetplanError::EmptyMatcher { index: 2, .. })
        ));

        let result = RuleSet::new(vec![Rule::new(Category::Fonts).with_extensions(["."])]);
        assert!(matches!(result, Err(AssetplanError::EmptyMatcher { .. })));
    }

    #[test]
    fn test_ambiguous_matcher_rejected() {
        let result = RuleSet::new(vec![
            Rule::new(Category::Images)
                .with_extensions(["png"])
                .with_pattern("**/*.png"),
        ]);
        assert!(matches!(
            result,
            Err(AssetplanError::AmbiguousMatcher { index: 1, .. })
        ));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let result = RuleSet::new(vec![Rule::new(Category::Images).with_pattern("**/[")]);
        assert!(matches!(result, Err(AssetplanError::InvalidPattern { .. })));
    }

    #[test]
    fn test_overlapping_extensions_accepted() {
        let set = RuleSet::new(vec![
            Rule::new(Category::Images).with_extensions(["svg"]),
            Rule::new(Category::Fonts).with_extensions(["svg"]),
        ]);
        assert!(set.is_ok());
    }

    #[test]
    fn test_empty_rule_set() {
        let set = RuleSet::new(Vec::new()).unwrap();
        assert!(set.is_empty());
        assert!(set.find(Path::new("logo.png")).is_none());
    }

    #[test]
    fn test_category_serde() {
        let yaml = "category: video\nextensions: [mp4]\n";
        let rule: Rule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rule.category, Category::Video);
        assert!(rule.chain.is_empty());
        assert_eq!(Category::Fonts.to_string(), "fonts");
    }
}
