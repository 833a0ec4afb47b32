//! Error types for deploylint operations.
//!
//! This module defines [`LintError`], the error type returned by the
//! library and the CLI, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Content problems in a configuration are never errors; they are
//!   reported as [`Issue`](crate::lint::Issue)s
//! - Use `LintError` when the input bytes cannot be obtained or the
//!   service cannot be configured
//! - Use `anyhow::Error` (via `LintError::Other`) for unexpected
//!   process-level failures such as binding a socket

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for deploylint operations.
#[derive(Debug, Error)]
pub enum LintError {
    /// The configuration file could not be read.
    #[error("{}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid service settings.
    #[error("Invalid server configuration: {message}")]
    ServerConfig { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for deploylint operations.
pub type Result<T> = std::result::Result<T, LintError>;
