//! Resolve command implementation

use std::path::{Path, PathBuf};

use crate::cli::ResolveArgs;
use crate::commands::helpers::{self, Context};
use crate::error::Result;
use crate::manifest::{AssetSink, Manifest};
use crate::resolver::Resolution;
use crate::ui;

/// Run resolve command
pub fn run(project: Option<PathBuf>, mode: Option<String>, args: ResolveArgs) -> Result<()> {
    let ctx = helpers::load_context(project, mode.as_deref())?;
    let mode = ctx.resolver.mode();

    let mut manifest = Manifest::new(mode);
    let mut resolutions = Vec::with_capacity(args.paths.len());
    for path in &args.paths {
        let resolution = resolve_path(&ctx, path)?;
        manifest.emit(&resolution)?;
        resolutions.push(resolution);
    }

    if args.json {
        println!("{}", manifest.to_json()?);
        return Ok(());
    }

    ui::display_profile(mode);
    for resolution in &resolutions {
        ui::display_resolution(resolution);
    }

    Ok(())
}

/// Resolve a single path given on the command line.
///
/// Paths inside the source directory are matched relative to it, the same
/// way `plan` sees them. The file is only read for a matched asset in
/// production, so unknown types and development paths need not exist.
fn resolve_path(ctx: &Context, path: &Path) -> Result<Resolution> {
    let full_path = ctx.project_root.join(path);
    let asset_path = full_path
        .strip_prefix(&ctx.config.source_dir)
        .unwrap_or(path);

    ctx.resolver.resolve_file(asset_path, &full_path)
}
