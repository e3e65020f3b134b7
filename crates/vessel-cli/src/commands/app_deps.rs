//! Handler for `vessel app-deps`.

use std::path::Path;

use miette::Result;
use vessel_core::config::VesselConfig;
use vessel_core::package_json::app_dependencies;
use vessel_util::errors::VesselError;

pub fn exec(project_root: &Path, json: bool) -> Result<()> {
    let config = VesselConfig::load(project_root)?;
    let deps = app_dependencies(&config)?;

    if json {
        let out = serde_json::to_string_pretty(&deps).map_err(|e| VesselError::Generic {
            message: format!("Failed to serialize dependencies: {e}"),
        })?;
        println!("{out}");
    } else if deps.is_empty() {
        println!("No dependencies.");
    } else {
        for (name, range) in &deps {
            println!("{name} {range}");
        }
    }

    Ok(())
}
