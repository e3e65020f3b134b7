//! Shared utilities for Vessel.
//!
//! This crate provides cross-cutting concerns used by the other Vessel crates:
//! the unified error type and filesystem helpers for walking `node_modules`
//! layouts.

pub mod errors;
pub mod fs;
