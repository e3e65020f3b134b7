use std::path::{Path, PathBuf};

/// Walk up from `start` looking for a file named `filename`.
/// Returns the path to the directory containing the file, or `None`.
pub fn find_ancestor_with(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Every `<ancestor>/<container>` directory from `start` upwards, nearest first.
///
/// This is the lookup order used for bare package names: `./node_modules`,
/// then `../node_modules`, and so on up to the filesystem root.
pub fn container_dirs(start: &Path, container: &str) -> Vec<PathBuf> {
    start
        .ancestors()
        // Never look for node_modules/node_modules.
        .filter(|dir| dir.file_name().map_or(true, |n| n != container))
        .map(|dir| dir.join(container))
        .filter(|dir| dir.is_dir())
        .collect()
}

/// Join a package name onto a directory, splitting scoped names
/// (`@scope/name`) into their path components.
pub fn join_package(dir: &Path, name: &str) -> PathBuf {
    name.split('/').fold(dir.to_path_buf(), |acc, part| acc.join(part))
}
