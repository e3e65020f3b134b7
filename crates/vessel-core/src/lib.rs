//! Core data types for Vessel.
//!
//! This crate defines the package manifest model (`package.json`), the
//! lookup of an application's own dependencies, and the `vessel.toml`
//! configuration.
//!
//! This crate is intentionally free of module-resolution logic; see
//! `vessel-resolver` for that.

/// File name of a package manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// Default name of the directory holding installed packages.
pub const DEFAULT_DEPENDENCY_CONTAINER: &str = "node_modules";

pub mod config;
pub mod package_json;
