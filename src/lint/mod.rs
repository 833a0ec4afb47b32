//! Configuration validation and linting.
//!
//! This module turns configuration text into an ordered list of
//! [`Issue`]s.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - One validator per section ([`LintRule`] trait)
//! - **Registry** - The built-in rules in evaluation order ([`RuleRegistry`])
//! - **Linter** - Runs the registry over scanned text ([`Linter`])
//! - **Issues** - Findings with line, severity and an optional fix ([`Issue`])
//!
//! Content problems are always issues. Only obtaining the input bytes can
//! fail.
//!
//! # Example
//!
//! ```
//! use deploylint::lint::{is_fatal, lint_str, Severity};
//!
//! let issues = lint_str("metadata:\n  name: api\n  env: prod\nsettings:\n  replicas: 2\n");
//! assert_eq!(issues.len(), 1);
//! assert_eq!(issues[0].severity, Severity::Warning);
//! assert!(!is_fatal(&issues, false));
//! assert!(is_fatal(&issues, true));
//! ```

pub mod diagnostic;
pub mod linter;
pub mod output;
pub mod registry;
pub mod report;
pub mod rule;
pub mod rules;
pub mod schema;

pub use diagnostic::Issue;
pub use linter::Linter;
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, SarifFormatter};
pub use registry::RuleRegistry;
pub use report::{is_fatal, FileReport};
pub use rule::{LintRule, RuleId, Severity};
pub use rules::{FeaturesRule, MetadataRule, SettingsRule};
pub use schema::LintSchema;

use std::io::Read;
use std::path::Path;

use crate::error::{LintError, Result};

/// Lint configuration text with the built-in rules.
pub fn lint_str(text: &str) -> Vec<Issue> {
    Linter::new().lint_str(text)
}

/// Lint raw bytes. Invalid UTF-8 is replaced, never rejected.
pub fn lint_bytes(bytes: &[u8]) -> Vec<Issue> {
    lint_str(&String::from_utf8_lossy(bytes))
}

/// Read everything from `reader` and lint it.
pub fn lint_reader(mut reader: impl Read) -> std::io::Result<Vec<Issue>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(lint_bytes(&bytes))
}

/// Read and lint a file.
pub fn lint_file(path: &Path) -> Result<Vec<Issue>> {
    let bytes = std::fs::read(path).map_err(|source| LintError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(lint_bytes(&bytes))
}
