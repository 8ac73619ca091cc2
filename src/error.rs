//! Error types for Numsec operations.
//!
//! This module defines [`NumsecError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `NumsecError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `NumsecError::Other`) for unexpected errors
//! - Per-file read failures during a scan are not errors at all: the scanner
//!   skips the file, counts it, and continues

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Numsec operations.
#[derive(Debug, Error)]
pub enum NumsecError {
    /// Referenced project template does not exist.
    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    /// Project scaffolding failed partway through.
    #[error("Failed to initialize project at {path}: {message}")]
    TemplateInstall { path: PathBuf, message: String },

    /// Target directory already exists and the caller did not force.
    #[error("Directory already exists: {path} (use --force to proceed)")]
    ProjectExists { path: PathBuf },

    /// Analysis target is missing or is not a directory.
    #[error("Project root is not a directory: {path}")]
    InvalidProjectRoot { path: PathBuf },

    /// Embedded scaffold declares an artifact format this binary cannot produce.
    #[error("Unsupported artifact format version {found} (supported: {supported})")]
    UnsupportedArtifactFormat { found: u32, supported: u32 },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Numsec operations.
pub type Result<T> = std::result::Result<T, NumsecError>;
