use clap::Parser;
use std::path::PathBuf;

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve one asset:\n    assetplan resolve src/images/logo.png\n\n\
                  Resolve for production (hashes file contents):\n    assetplan --mode production resolve src/fonts/brand.woff2\n\n\
                  Print JSON:\n    assetplan resolve src/video/clip.mp4 --json")]
pub struct ResolveArgs {
    /// Asset paths, relative to the project directory
    #[arg(required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,

    /// Print the result as a JSON manifest
    #[arg(long)]
    pub json: bool,
}
