//! Node-compatible resolution of bare package names to entry files.

use std::path::{Path, PathBuf};

use serde_json::Value;
use vessel_core::config::VesselConfig;
use vessel_core::package_json::PackageJson;
use vessel_core::{DEFAULT_DEPENDENCY_CONTAINER, MANIFEST_FILE};
use vessel_util::errors::VesselError;
use vessel_util::fs::{container_dirs, join_package};

/// Export conditions tried, in priority order, when an `exports` target is a
/// condition object.
const CONDITIONS: [&str; 4] = ["require", "node", "default", "import"];

/// Outcome of resolving a bare package name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Absolute, symlink-free path of the package's entry file.
    Found(PathBuf),
    /// No installed package provides an entry file for the name.
    NotFound,
    /// The package is installed but its `exports` map has no root entry.
    NotExported,
}

/// Resolves a bare package name the way an `import` statement would.
///
/// `Err` covers every failure that is neither "not found" nor
/// "not exported", e.g. an unreadable or corrupt `package.json`.
pub trait ModuleResolver {
    fn resolve(&self, name: &str) -> Result<Resolution, VesselError>;

    /// Name of the directory that holds installed packages.
    fn container(&self) -> &str {
        DEFAULT_DEPENDENCY_CONTAINER
    }
}

impl<R: ModuleResolver + ?Sized> ModuleResolver for &R {
    fn resolve(&self, name: &str) -> Result<Resolution, VesselError> {
        (**self).resolve(name)
    }

    fn container(&self) -> &str {
        (**self).container()
    }
}

/// Resolver over a `node_modules` hierarchy, starting at `base_dir`.
#[derive(Debug, Clone)]
pub struct NodeResolver {
    base_dir: PathBuf,
    container: String,
}

impl NodeResolver {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            container: DEFAULT_DEPENDENCY_CONTAINER.to_string(),
        }
    }

    /// Use a container directory other than `node_modules`.
    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = container.into();
        self
    }

    /// Resolver rooted at the configured app directory.
    pub fn from_config(config: &VesselConfig) -> Self {
        Self::new(&config.root_dir).with_container(&config.dependency_container)
    }
}

impl ModuleResolver for NodeResolver {
    fn resolve(&self, name: &str) -> Result<Resolution, VesselError> {
        if !is_bare_name(name) {
            return Err(VesselError::Resolution {
                message: format!("\"{name}\" is not a bare package name"),
            });
        }

        for dir in container_dirs(&self.base_dir, &self.container) {
            let pkg_dir = join_package(&dir, name);
            if !pkg_dir.is_dir() {
                continue;
            }
            if let Some(resolution) = resolve_in_package(&pkg_dir)? {
                return Ok(resolution);
            }
            tracing::debug!("No entry file in {}, continuing upwards", pkg_dir.display());
        }

        Ok(Resolution::NotFound)
    }

    fn container(&self) -> &str {
        &self.container
    }
}

fn is_bare_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.starts_with('/')
        && !Path::new(name).is_absolute()
}

/// Resolve the entry file of the package installed at `pkg_dir`.
///
/// `None` means the directory has no entry file and the search should move
/// on to the next container directory.
fn resolve_in_package(pkg_dir: &Path) -> Result<Option<Resolution>, VesselError> {
    let manifest_path = pkg_dir.join(MANIFEST_FILE);
    let manifest = if manifest_path.is_file() {
        let content = std::fs::read_to_string(&manifest_path)?;
        PackageJson::from_str(&content).map_err(|e| VesselError::Resolution {
            message: format!("Invalid {}: {e}", manifest_path.display()),
        })?
    } else {
        PackageJson::default()
    };

    if let Some(exports) = &manifest.exports {
        // An exports map is authoritative: no fallback to `main`.
        return match exports_root(exports) {
            Some(target) => {
                let file = pkg_dir.join(target.trim_start_matches("./"));
                if file.is_file() {
                    Ok(Some(Resolution::Found(std::fs::canonicalize(&file)?)))
                } else {
                    Ok(Some(Resolution::NotFound))
                }
            }
            None => Ok(Some(Resolution::NotExported)),
        };
    }

    let mut candidates = Vec::new();
    if let Some(main) = manifest.main.as_deref().filter(|m| !m.is_empty()) {
        let main = pkg_dir.join(main);
        candidates.push(main.clone());
        candidates.push(with_suffix(&main, ".js"));
        candidates.push(with_suffix(&main, ".json"));
        candidates.push(main.join("index.js"));
    }
    candidates.push(pkg_dir.join("index.js"));
    candidates.push(pkg_dir.join("index.json"));

    match candidates.into_iter().find(|c| c.is_file()) {
        Some(file) => Ok(Some(Resolution::Found(std::fs::canonicalize(&file)?))),
        None => Ok(None),
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut s = path.as_os_str().to_owned();
    s.push(suffix);
    PathBuf::from(s)
}

/// Target of the package root (`"."`) in an `exports` field.
///
/// An object whose keys start with `.` is a subpath map; any other object is
/// a condition map for the root itself.
fn exports_root(exports: &Value) -> Option<&str> {
    match exports {
        Value::Object(map) if map.keys().any(|k| k.starts_with('.')) => {
            map.get(".").and_then(conditional_target)
        }
        other => conditional_target(other),
    }
}

fn conditional_target(target: &Value) -> Option<&str> {
    match target {
        Value::String(s) => Some(s.as_str()),
        Value::Array(items) => items.iter().find_map(conditional_target),
        Value::Object(map) => CONDITIONS
            .iter()
            .find_map(|c| map.get(*c).and_then(conditional_target)),
        // `null` explicitly hides the path.
        _ => None,
    }
}
