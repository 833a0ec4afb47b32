//! deploylint - Line-accurate linting for deployment configuration files.
//!
//! deploylint reads a small YAML or JSON deployment configuration without
//! fully parsing it, tracks which section each line belongs to, and reports
//! missing or malformed settings with the 1-based line they refer to.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Validation rules, issue collection and output formats
//! - [`scan`] - Line classification and section tracking
//! - [`server`] - HTTP lint service
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use deploylint::lint::{lint_str, Severity};
//!
//! let issues = lint_str("settings:\n  replicas: 0\n");
//! assert!(issues.iter().any(|i| i.severity == Severity::Error && i.line == 2));
//! ```

pub mod cli;
pub mod error;
pub mod lint;
pub mod scan;
pub mod server;
pub mod ui;

pub use error::{LintError, Result};
