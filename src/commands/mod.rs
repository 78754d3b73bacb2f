//! Command implementations for assetplan CLI

pub mod completions;
pub mod helpers;
pub mod plan;
pub mod resolve;
pub mod rules;
pub mod version;
