use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

use vessel_util::errors::{VesselError, VesselResult};

use crate::config::VesselConfig;

/// Dependency name to version range. Ranges are carried, never interpreted.
pub type DependencyMapping = BTreeMap<String, String>;

/// The fields of a `package.json` that Vessel reads.
///
/// Parsing is strict about JSON syntax and lenient about shape: a field of an
/// unexpected type is treated as absent rather than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    #[serde(default, deserialize_with = "lenient_string")]
    pub main: Option<String>,

    /// Raw `exports` field; interpreted by the resolver.
    #[serde(default)]
    pub exports: Option<Value>,

    #[serde(default, deserialize_with = "lenient_mapping")]
    pub dependencies: DependencyMapping,
}

impl PackageJson {
    /// Load and parse a `package.json` file from the given path.
    pub fn from_path(path: &Path) -> VesselResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| VesselError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_str(&content).map_err(|e| {
            VesselError::Manifest {
                message: format!("{}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Parse a `package.json` from a string.
    ///
    /// Valid JSON that is not an object (e.g. `null`) yields an empty manifest.
    pub fn from_str(content: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(content)?;
        if !value.is_object() {
            return Ok(Self::default());
        }
        serde_json::from_value(value)
    }
}

/// Read the runtime `dependencies` of the manifest at `path`.
///
/// A manifest without a `dependencies` object yields an empty mapping.
/// Malformed JSON is a [`VesselError::Manifest`] error.
pub fn package_dependencies(path: &Path) -> VesselResult<DependencyMapping> {
    Ok(PackageJson::from_path(path)?.dependencies)
}

/// Read the runtime dependencies declared by the application itself,
/// i.e. `<root-dir>/package.json`.
pub fn app_dependencies(config: &VesselConfig) -> VesselResult<DependencyMapping> {
    package_dependencies(&config.app_manifest_path())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

fn lenient_mapping<'de, D>(deserializer: D) -> Result<DependencyMapping, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Object(map) = value else {
        return Ok(DependencyMapping::new());
    };
    Ok(map
        .into_iter()
        .map(|(name, range)| {
            let range = match range {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (name, range)
        })
        .collect())
}
