//! Handler for `vessel bundle`.

use std::path::Path;

use miette::Result;
use vessel_core::config::VesselConfig;
use vessel_core::package_json::app_dependencies;
use vessel_resolver::closure::resolve_closure;
use vessel_resolver::locator::PackageLocator;
use vessel_resolver::node::NodeResolver;
use vessel_util::errors::VesselError;

pub fn exec(project_root: &Path, packages: &[String], app: bool, json: bool) -> Result<()> {
    let config = VesselConfig::load(project_root)?;

    let mut seeds = packages.to_vec();
    if app {
        seeds.extend(app_dependencies(&config)?.into_keys());
    } else if seeds.is_empty() {
        seeds = config.server_dependencies_to_bundle.clone();
    }
    if seeds.is_empty() {
        tracing::warn!("No packages given and none configured in vessel.toml");
    }

    let locator = PackageLocator::new(NodeResolver::from_config(&config));
    let closure = resolve_closure(&seeds, &locator)?;
    if !closure.unresolved.is_empty() {
        tracing::warn!(
            "{} package(s) could not be expanded: {}",
            closure.unresolved.len(),
            closure.unresolved.iter().cloned().collect::<Vec<_>>().join(", ")
        );
    }

    if json {
        let out = serde_json::to_string_pretty(&closure.packages).map_err(|e| {
            VesselError::Generic {
                message: format!("Failed to serialize package list: {e}"),
            }
        })?;
        println!("{out}");
    } else {
        for name in &closure.packages {
            println!("{name}");
        }
    }

    Ok(())
}
