//! Lint issues.
//!
//! This module provides the [`Issue`] type for representing findings
//! produced by the validators. Each issue carries the 1-based line it
//! refers to and, optionally, a fix suggestion.

use serde::{Deserialize, Serialize};

use super::rule::{RuleId, Severity};

/// A single finding produced by a lint rule.
///
/// Serializes to the wire shape shared by the HTTP service and the JSON
/// output: `{"line", "severity", "message", "suggestedFix"}`. The rule
/// id stays internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// The rule that produced this issue.
    #[serde(skip)]
    pub rule_id: RuleId,
    /// 1-based source line.
    pub line: usize,
    /// Severity of this issue.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing the issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<String>,
}

impl Issue {
    /// Create a new issue.
    pub fn new(
        rule_id: RuleId,
        severity: Severity,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id,
            line,
            severity,
            message: message.into(),
            suggested_fix: None,
        }
    }

    /// Add a fix suggestion.
    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.suggested_fix = Some(fix.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
