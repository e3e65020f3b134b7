use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use vessel_util::errors::{VesselError, VesselResult};

use crate::{DEFAULT_DEPENDENCY_CONTAINER, MANIFEST_FILE};

/// File name of the project configuration.
pub const CONFIG_FILE: &str = "vessel.toml";

/// Project configuration loaded from `vessel.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VesselConfig {
    /// Directory holding the app's `package.json`. Bare package names are
    /// resolved from here. Relative paths are taken from the project root.
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,

    #[serde(default = "default_dependency_container")]
    pub dependency_container: String,

    /// Packages to inline into the server build when none are given on the
    /// command line.
    #[serde(default)]
    pub server_dependencies_to_bundle: Vec<String>,
}

impl Default for VesselConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            dependency_container: default_dependency_container(),
            server_dependencies_to_bundle: Vec::new(),
        }
    }
}

fn default_root_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_dependency_container() -> String {
    DEFAULT_DEPENDENCY_CONTAINER.to_string()
}

impl VesselConfig {
    /// Load `vessel.toml` from `project_root`, or return defaults if the file
    /// doesn't exist. `root_dir` is made absolute against `project_root`.
    pub fn load(project_root: &Path) -> VesselResult<Self> {
        let path = project_root.join(CONFIG_FILE);
        let mut config = if path.is_file() {
            let content = std::fs::read_to_string(&path).map_err(|e| VesselError::Config {
                message: format!("Failed to read {}: {e}", path.display()),
            })?;
            Self::from_str(&content)?
        } else {
            tracing::debug!("No {CONFIG_FILE} in {}, using defaults", project_root.display());
            Self::default()
        };
        if config.root_dir.is_relative() {
            config.root_dir = project_root.join(&config.root_dir);
        }
        Ok(config)
    }

    /// Parse a `vessel.toml` from a string.
    pub fn from_str(content: &str) -> VesselResult<Self> {
        toml::from_str(content).map_err(|e| {
            VesselError::Config {
                message: format!("Failed to parse {CONFIG_FILE}: {e}"),
            }
            .into()
        })
    }

    /// Path to the application's own `package.json`.
    pub fn app_manifest_path(&self) -> PathBuf {
        self.root_dir.join(MANIFEST_FILE)
    }
}
