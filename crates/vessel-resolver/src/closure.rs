//! Transitive closure of runtime dependencies.
//!
//! Starting from a list of seed package names, every package is located,
//! its `package.json` is read, and its `dependencies` are added to the
//! result and expanded in turn. Each distinct name is expanded at most once,
//! so dependency cycles terminate. Packages that cannot be located still
//! appear in the result; they just contribute nothing further.

use std::collections::{BTreeSet, HashSet};

use vessel_core::package_json::package_dependencies;
use vessel_core::MANIFEST_FILE;
use vessel_util::errors::VesselResult;

use crate::locator::PackageLocator;
use crate::node::ModuleResolver;

/// The output of a closure computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyClosure {
    /// Seeds plus every dependency name reachable from them.
    pub packages: BTreeSet<String>,
    /// Names that were expanded but could not be located, or whose root had
    /// no manifest.
    pub unresolved: BTreeSet<String>,
}

impl DependencyClosure {
    /// Whether `name` is in the bundle set.
    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains(name)
    }

    /// Number of packages in the bundle set.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// True only when no seeds were given.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// The package names, sorted. Callers must not rely on the order.
    pub fn into_vec(self) -> Vec<String> {
        self.packages.into_iter().collect()
    }
}

/// Compute the closure of `seeds` over declared runtime dependencies.
///
/// Unresolvable packages and missing manifests are logged and skipped. A
/// malformed manifest aborts the whole computation.
pub fn resolve_closure<R, S>(
    seeds: &[S],
    locator: &PackageLocator<R>,
) -> VesselResult<DependencyClosure>
where
    R: ModuleResolver,
    S: AsRef<str>,
{
    let mut closure = DependencyClosure {
        packages: seeds.iter().map(|s| s.as_ref().to_string()).collect(),
        unresolved: BTreeSet::new(),
    };
    let mut visited: HashSet<String> = HashSet::new();
    // Reversed so that seeds are expanded in the order given.
    let mut stack: Vec<String> = seeds.iter().rev().map(|s| s.as_ref().to_string()).collect();

    while let Some(name) = stack.pop() {
        if !visited.insert(name.clone()) {
            continue;
        }

        let Some(root) = locator.locate(&name) else {
            closure.unresolved.insert(name);
            continue;
        };

        let manifest = root.join(MANIFEST_FILE);
        if !manifest.is_file() {
            tracing::warn!("{} does not exist", manifest.display());
            closure.unresolved.insert(name);
            continue;
        }

        let dependencies = package_dependencies(&manifest)?;
        tracing::debug!("{name}: {} dependencies", dependencies.len());

        for dep in dependencies.into_keys().rev() {
            closure.packages.insert(dep.clone());
            if !visited.contains(&dep) {
                stack.push(dep);
            }
        }
    }

    Ok(closure)
}

/// Names of every package that must be inlined into the server bundle for
/// `seeds` to work, seeds included.
pub fn dependencies_to_bundle<R, S>(
    seeds: &[S],
    locator: &PackageLocator<R>,
) -> VesselResult<Vec<String>>
where
    R: ModuleResolver,
    S: AsRef<str>,
{
    Ok(resolve_closure(seeds, locator)?.into_vec())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use tempfile::TempDir;
    use vessel_util::errors::VesselError;

    use super::*;
    use crate::node::Resolution;

    /// Resolver backed by a fixed name -> entry file table.
    struct TableResolver(HashMap<String, PathBuf>);

    impl ModuleResolver for TableResolver {
        fn resolve(&self, name: &str) -> Result<Resolution, VesselError> {
            Ok(self
                .0
                .get(name)
                .cloned()
                .map(Resolution::Found)
                .unwrap_or(Resolution::NotFound))
        }
    }

    fn package(tmp: &TempDir, name: &str, deps: &[&str]) -> (String, PathBuf) {
        let root = tmp.path().join("node_modules").join(name);
        std::fs::create_dir_all(&root).unwrap();
        let deps: serde_json::Map<String, serde_json::Value> = deps
            .iter()
            .map(|d| (d.to_string(), serde_json::Value::from("*")))
            .collect();
        let manifest = serde_json::json!({ "name": name, "dependencies": deps });
        std::fs::write(root.join("package.json"), manifest.to_string()).unwrap();
        std::fs::write(root.join("index.js"), "").unwrap();
        (name.to_string(), root.join("index.js"))
    }

    #[test]
    fn diamond_expands_shared_dependency_once() {
        let tmp = TempDir::new().unwrap();
        let table = HashMap::from([
            package(&tmp, "a", &["b", "c"]),
            package(&tmp, "b", &["d"]),
            package(&tmp, "c", &["d"]),
            package(&tmp, "d", &[]),
        ]);
        let locator = PackageLocator::new(TableResolver(table));

        let closure = resolve_closure(&["a"], &locator).unwrap();
        assert_eq!(closure.into_vec(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn missing_manifest_is_unresolved() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("node_modules").join("bare");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("index.js"), "").unwrap();
        let table = HashMap::from([("bare".to_string(), root.join("index.js"))]);
        let locator = PackageLocator::new(TableResolver(table));

        let closure = resolve_closure(&["bare"], &locator).unwrap();
        assert!(closure.contains("bare"));
        assert!(closure.unresolved.contains("bare"));
    }

    #[test]
    fn malformed_manifest_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let (_, entry) = package(&tmp, "a", &["broken"]);
        let root = tmp.path().join("node_modules").join("broken");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("package.json"), "{\"dependencies\": ").unwrap();
        let table = HashMap::from([
            ("a".to_string(), entry),
            ("broken".to_string(), root.join("index.js")),
        ]);
        let locator = PackageLocator::new(TableResolver(table));

        let err = resolve_closure(&["a"], &locator).unwrap_err();
        assert!(err.to_string().starts_with("Manifest error"), "got: {err}");
    }

    #[test]
    fn empty_seeds() {
        let locator = PackageLocator::new(TableResolver(HashMap::new()));
        let closure = resolve_closure::<_, &str>(&[], &locator).unwrap();
        assert!(closure.is_empty());
    }
}
