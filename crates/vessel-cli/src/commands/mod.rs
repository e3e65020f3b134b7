//! Command dispatch and handler modules.

mod app_deps;
mod bundle;

use std::path::PathBuf;

use miette::Result;
use vessel_core::config::CONFIG_FILE;
use vessel_core::MANIFEST_FILE;
use vessel_util::errors::VesselError;
use vessel_util::fs::find_ancestor_with;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let project_root = match cli.dir {
        Some(dir) => dir,
        None => discover_project_root()?,
    };

    match cli.command {
        Command::Bundle {
            packages,
            app,
            json,
        } => bundle::exec(&project_root, &packages, app, json),
        Command::AppDeps { json } => app_deps::exec(&project_root, json),
    }
}

/// Nearest ancestor of the working directory holding `vessel.toml`, else
/// `package.json`, else the working directory itself.
fn discover_project_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(VesselError::Io)?;
    let root = find_ancestor_with(&cwd, CONFIG_FILE)
        .or_else(|| find_ancestor_with(&cwd, MANIFEST_FILE))
        .unwrap_or(cwd);
    tracing::debug!("Project root: {}", root.display());
    Ok(root)
}
