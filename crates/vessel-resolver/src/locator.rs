//! Package root location.
//!
//! Module resolution yields an entry *file*, not the package directory. The
//! root is recovered from the file path by finding the last
//! `<container>/<name>` run of path components and cutting the path after it.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use crate::node::{ModuleResolver, Resolution};

/// Infer the root directory of package `name` from its resolved entry file.
///
/// Returns `None` when the path contains no `<container>/<name>` segment.
pub fn package_root(entry: &Path, container: &str, name: &str) -> Option<PathBuf> {
    let segment: Vec<Component<'_>> = std::iter::once(container)
        .chain(name.split('/'))
        .map(|part| Component::Normal(OsStr::new(part)))
        .collect();
    let components: Vec<Component<'_>> = entry.components().collect();
    if components.len() < segment.len() {
        return None;
    }

    let start = components
        .windows(segment.len())
        .rposition(|window| window == segment.as_slice())?;
    Some(components[..start + segment.len()].iter().collect())
}

/// Finds the on-disk root of installed packages.
///
/// All failures are logged and reported as `None`; locating a package never
/// aborts a traversal.
#[derive(Debug, Clone)]
pub struct PackageLocator<R> {
    resolver: R,
}

impl<R: ModuleResolver> PackageLocator<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Root directory of package `name`, or `None` if it cannot be located.
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        let entry = match self.resolver.resolve(name) {
            Ok(Resolution::Found(entry)) => entry,
            Ok(Resolution::NotFound) => {
                tracing::warn!("Package \"{name}\" could not be resolved");
                return None;
            }
            Ok(Resolution::NotExported) => {
                tracing::warn!(
                    "Package \"{name}\" does not export a root entry point; \
                     list its dependencies to bundle explicitly"
                );
                return None;
            }
            Err(e) => {
                tracing::debug!("Failed to resolve package \"{name}\": {e}");
                return None;
            }
        };

        let container = self.resolver.container();
        let root = package_root(&entry, container, name);
        if root.is_none() {
            tracing::warn!(
                "Package \"{name}\" resolved to {}, which is not inside {container}/{name}",
                entry.display()
            );
        }
        root
    }
}
