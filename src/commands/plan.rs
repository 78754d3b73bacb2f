//! Plan command implementation
//!
//! Scans the source directory, resolves every file and collects the
//! results into a manifest. Files are resolved on scoped worker threads that
//! share one resolver; chunk order is kept, so the output order matches the
//! sorted scan.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use console::Style;

use crate::cli::PlanArgs;
use crate::commands::helpers;
use crate::error::{AssetplanError, Result};
use crate::manifest::{AssetSink, Manifest};
use crate::progress::PlanProgress;
use crate::resolver::{Resolution, Resolver};
use crate::scan::scan;
use crate::ui;

/// Run plan command
pub fn run(project: Option<PathBuf>, mode: Option<String>, args: PlanArgs) -> Result<()> {
    let ctx = helpers::load_context(project, mode.as_deref())?;
    let mode = ctx.resolver.mode();

    let files = scan(&ctx.config.source_dir, &ctx.config.exclude)?;
    let progress = PlanProgress::new(files.len() as u64, args.json);

    let resolutions =
        match resolve_all(&ctx.resolver, &ctx.config.source_dir, &files, &progress) {
            Ok(resolutions) => {
                progress.finish();
                resolutions
            }
            Err(e) => {
                progress.abandon();
                return Err(e);
            }
        };

    let mut manifest = Manifest::new(mode);
    for resolution in &resolutions {
        manifest.emit(resolution)?;
    }

    if let Some(output) = &args.output {
        let output_path = ctx.project_root.join(output);
        manifest.save(&output_path)?;
        tracing::info!(path = %output_path.display(), "manifest written");
        if !args.json {
            println!(
                "{} {}",
                Style::new().bold().apply_to("Wrote manifest to"),
                output_path.display()
            );
        }
    }

    if args.json {
        println!("{}", manifest.to_json()?);
        return Ok(());
    }

    ui::display_profile(mode);
    for resolution in &resolutions {
        ui::display_resolution(resolution);
    }
    ui::display_summary(&manifest);

    Ok(())
}

/// Resolve all files, keeping their order
fn resolve_all(
    resolver: &Resolver,
    source_dir: &Path,
    files: &[PathBuf],
    progress: &PlanProgress,
) -> Result<Vec<Resolution>> {
    if files.is_empty() {
        return Ok(Vec::new());
    }

    let workers = std::thread::available_parallelism()
        .map_or(1, NonZeroUsize::get)
        .min(files.len());
    let chunk_size = files.len().div_ceil(workers);

    std::thread::scope(|scope| {
        let handles: Vec<_> = files
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|relative| {
                            let resolution = resolve_file(resolver, source_dir, relative);
                            progress.inc();
                            resolution
                        })
                        .collect::<Result<Vec<_>>>()
                })
            })
            .collect();

        let mut resolutions = Vec::with_capacity(files.len());
        for handle in handles {
            let chunk = handle.join().map_err(|_| AssetplanError::IoError {
                message: "resolver worker panicked".to_string(),
            })??;
            resolutions.extend(chunk);
        }
        Ok(resolutions)
    })
}

/// Resolve one scanned file; contents are streamed only when hashing
fn resolve_file(resolver: &Resolver, source_dir: &Path, relative: &Path) -> Result<Resolution> {
    resolver.resolve_file(relative, &source_dir.join(relative))
}
