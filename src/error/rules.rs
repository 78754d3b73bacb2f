//! Rule table errors

use super::AssetplanError;

pub fn empty_matcher(index: usize, category: impl Into<String>) -> AssetplanError {
    AssetplanError::EmptyMatcher {
        index,
        category: category.into(),
    }
}

pub fn ambiguous_matcher(index: usize, category: impl Into<String>) -> AssetplanError {
    AssetplanError::AmbiguousMatcher {
        index,
        category: category.into(),
    }
}

pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> AssetplanError {
    AssetplanError::InvalidPattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}
