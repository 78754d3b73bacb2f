//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - resolve: Resolve command arguments
//! - plan: Plan command arguments
//! - rules: Rules command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod plan;
pub mod resolve;
pub mod rules;

pub use completions::CompletionsArgs;
pub use plan::PlanArgs;
pub use resolve::ResolveArgs;
pub use rules::RulesArgs;

/// assetplan - asset pipeline rule resolver
///
/// Decide which transform chain applies to each front-end asset and where it is emitted.
#[derive(Parser, Debug)]
#[command(
    name = "assetplan",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Asset pipeline rule resolver for front-end builds",
    long_about = "assetplan matches front-end assets (styles, scripts, images, fonts, media) \
                  against an ordered rule table, picks the loader chain for each one and \
                  computes its output path: stable names in development, content-hashed \
                  names in production.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  assetplan resolve images/logo.png          \x1b[90m# Show where one asset goes\x1b[0m\n   \
                  assetplan --mode production plan          \x1b[90m# Plan a production build\x1b[0m\n   \
                  assetplan plan --output manifest.json     \x1b[90m# Write the emission manifest\x1b[0m\n   \
                  assetplan rules                           \x1b[90m# Show the active rule table\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory holding assetplan.yaml (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "ASSETPLAN_PROJECT")]
    pub project: Option<PathBuf>,

    /// Build mode: development or production (anything else means development)
    #[arg(long, global = true, env = "NODE_ENV")]
    pub mode: Option<String>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve individual asset paths
    Resolve(ResolveArgs),

    /// Scan the source directory and plan every asset
    Plan(PlanArgs),

    /// Show the active rule table
    Rules(RulesArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
