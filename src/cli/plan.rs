use clap::Parser;
use std::path::PathBuf;

/// Arguments for the plan command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Plan the source directory:\n    assetplan plan\n\n\
                  Plan a production build:\n    NODE_ENV=production assetplan plan\n\n\
                  Write the manifest to a file:\n    assetplan plan --output manifest.json")]
pub struct PlanArgs {
    /// Print the manifest as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Write the manifest as JSON to this file (relative to the project directory)
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}
