//! Error types for courseprep operations.
//!
//! This module defines [`SetupError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SetupError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors
//! - Setup steps convert their own failure classes into a reported boolean
//!   plus a console message; errors that reach the caller are fatal

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for courseprep operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Requirements manifest not found at the expected location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// A manifest line could not be parsed as a requirement.
    #[error("Invalid requirement '{line}': {message}")]
    InvalidRequirement { line: String, message: String },

    /// External command could not be spawned.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The installed-package listing could not be decoded.
    #[error("Failed to decode installed package list: {message}")]
    PackageListDecode { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for courseprep operations.
pub type Result<T> = std::result::Result<T, SetupError>;
