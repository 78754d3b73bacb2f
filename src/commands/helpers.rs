//! Command helper utilities

use std::path::PathBuf;

use crate::config::{ConfigLoader, PipelineConfig};
use crate::error::{AssetplanError, Result};
use crate::mode::Mode;
use crate::resolver::Resolver;

/// Everything a command needs for one build run
pub struct Context {
    pub project_root: PathBuf,
    pub config: PipelineConfig,
    pub resolver: Resolver,
}

/// Resolve project path from optional argument
///
/// If a project path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_project_path(project: Option<PathBuf>) -> Result<PathBuf> {
    match project {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| AssetplanError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}

/// Load configuration, select the build mode and build the resolver.
///
/// The mode given on the command line (or via `NODE_ENV`) wins over the
/// config file's `mode`.
pub fn load_context(project: Option<PathBuf>, mode: Option<&str>) -> Result<Context> {
    let project_root = resolve_project_path(project)?;
    let config = ConfigLoader::new(&project_root).load()?;
    let mode = Mode::select([mode, config.mode.as_deref()]);
    tracing::debug!(%mode, project = %project_root.display(), "build context ready");

    let resolver = config.build_resolver(mode)?;

    Ok(Context {
        project_root,
        config,
        resolver,
    })
}
