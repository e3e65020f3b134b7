use vessel_util::fs::{container_dirs, find_ancestor_with, join_package};
use tempfile::TempDir;

#[test]
fn test_find_ancestor_with_direct() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("package.json"), "{}").unwrap();
    let result = find_ancestor_with(tmp.path(), "package.json");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_find_ancestor_with_nested() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("package.json"), "{}").unwrap();
    let nested = tmp.path().join("a").join("b").join("c");
    std::fs::create_dir_all(&nested).unwrap();
    let result = find_ancestor_with(&nested, "package.json");
    assert_eq!(result, Some(tmp.path().to_path_buf()));
}

#[test]
fn test_find_ancestor_with_not_found() {
    let tmp = TempDir::new().unwrap();
    let result = find_ancestor_with(tmp.path(), "NonExistent.file");
    assert_eq!(result, None);
}

#[test]
fn test_container_dirs_nearest_first() {
    let tmp = TempDir::new().unwrap();
    let app = tmp.path().join("app");
    std::fs::create_dir_all(tmp.path().join("node_modules")).unwrap();
    std::fs::create_dir_all(app.join("node_modules")).unwrap();

    let dirs = container_dirs(&app, "node_modules");
    assert_eq!(dirs[0], app.join("node_modules"));
    assert_eq!(dirs[1], tmp.path().join("node_modules"));
}

#[test]
fn test_container_dirs_skips_missing() {
    let tmp = TempDir::new().unwrap();
    let app = tmp.path().join("app");
    std::fs::create_dir_all(tmp.path().join("node_modules")).unwrap();
    std::fs::create_dir_all(&app).unwrap();

    let dirs = container_dirs(&app, "node_modules");
    assert_eq!(dirs.first(), Some(&tmp.path().join("node_modules")));
    assert!(!dirs.contains(&app.join("node_modules")));
}

#[test]
fn test_container_dirs_inside_container() {
    let tmp = TempDir::new().unwrap();
    let pkg = tmp.path().join("node_modules").join("a");
    std::fs::create_dir_all(&pkg).unwrap();

    let dirs = container_dirs(&pkg, "node_modules");
    assert!(!dirs.iter().any(|d| d.ends_with("node_modules/node_modules")));
    assert!(dirs.contains(&tmp.path().join("node_modules")));
}

#[test]
fn test_join_package_scoped() {
    let base = std::path::Path::new("/x/node_modules");
    assert_eq!(
        join_package(base, "@remix-run/node"),
        base.join("@remix-run").join("node")
    );
    assert_eq!(join_package(base, "react"), base.join("react"));
}
