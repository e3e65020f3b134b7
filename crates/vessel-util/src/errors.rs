use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all Vessel operations.
#[derive(Debug, Error, Diagnostic)]
pub enum VesselError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed package manifest (`package.json`).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("A corrupt package.json usually means a broken install; reinstall your dependencies"))]
    Manifest { message: String },

    /// A bare package name could not be resolved for a reason other than
    /// "not found" or "not exported".
    #[error("Module resolution failed: {message}")]
    Resolution { message: String },

    /// Invalid `vessel.toml`.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check your vessel.toml for syntax errors"))]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type VesselResult<T> = miette::Result<T>;
