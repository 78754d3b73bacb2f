//! Version command implementation

use crate::error::Result;
use crate::hash::DEFAULT_HASH_LENGTH;
use crate::mode::Mode;
use crate::rules::RuleSet;

/// Run version command
pub fn run() -> Result<()> {
    println!("assetplan {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", if cfg!(debug_assertions) { "debug" } else { "release" });
    println!();
    println!("Defaults:");
    println!("  Mode: {}", Mode::default());
    println!("  Built-in rules: {}", RuleSet::builtin().len());
    println!("  Content hash: blake3, {DEFAULT_HASH_LENGTH} hex chars");

    Ok(())
}
