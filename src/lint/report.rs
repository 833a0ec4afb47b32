//! Per-file results and the fatal policy.

use serde::Serialize;

use super::diagnostic::Issue;
use super::rule::Severity;

/// Whether a set of issues should fail the run.
///
/// Errors are always fatal. Warnings are fatal only when `strict` is set.
/// Every caller decides fatality through this function.
pub fn is_fatal(issues: &[Issue], strict: bool) -> bool {
    issues.iter().any(|issue| {
        issue.severity == Severity::Error || (strict && issue.severity == Severity::Warning)
    })
}

/// The issues found in one linted input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Path as given by the caller (`-` for stdin).
    pub path: String,
    pub issues: Vec<Issue>,
}

impl FileReport {
    pub fn new(path: impl Into<String>, issues: Vec<Issue>) -> Self {
        Self {
            path: path.into(),
            issues,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn is_fatal(&self, strict: bool) -> bool {
        is_fatal(&self.issues, strict)
    }

    pub fn errors(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warnings(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}
