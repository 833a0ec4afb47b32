//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait every built-in validator implements
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for issues (Warning, Error)

use serde::{Deserialize, Serialize};

use super::diagnostic::Issue;
use super::schema::LintSchema;
use crate::scan::ParsedConfig;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint issues.
///
/// Errors are always fatal. Warnings are fatal only in strict mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Should be addressed; fatal under `--strict`.
    #[serde(rename = "warn")]
    Warning,
    /// The configuration is not deployable.
    #[serde(rename = "error")]
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A validator for one section of a parsed configuration.
///
/// Rules are pure: they read the parsed structure and the schema and
/// return issues in the order they were found.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Check the configuration and return any issues.
    fn check(&self, config: &ParsedConfig, schema: &LintSchema) -> Vec<Issue>;
}
