//! Dependency closure engine: resolves bare package names to installed
//! packages, locates their roots, and aggregates the transitive set of
//! runtime dependencies to inline into a server bundle.

pub mod closure;
pub mod locator;
pub mod node;
