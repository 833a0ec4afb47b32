//! Settings section validation.

use super::is_positive_int;
use crate::lint::{Issue, LintRule, LintSchema, RuleId, Severity};
use crate::scan::{ParsedConfig, Section};

/// Validates `settings.replicas` and `settings.timeout`.
pub struct SettingsRule;

impl LintRule for SettingsRule {
    fn id(&self) -> RuleId {
        RuleId::new("settings")
    }

    fn name(&self) -> &str {
        "Settings"
    }

    fn description(&self) -> &str {
        "Requires a positive settings.replicas and checks settings.timeout"
    }

    fn check(&self, config: &ParsedConfig, schema: &LintSchema) -> Vec<Issue> {
        let mut issues = Vec::new();
        let anchor = config.anchor(Section::Settings);

        if config.settings.is_empty() {
            issues.push(
                Issue::new(self.id(), Severity::Error, anchor, "missing settings section")
                    .with_fix("Add a 'settings' mapping with 'replicas' and 'timeout'"),
            );
            return issues;
        }

        match config.settings.get("replicas") {
            None => issues.push(
                Issue::new(
                    self.id(),
                    Severity::Error,
                    anchor,
                    "settings.replicas is required",
                )
                .with_fix("Add settings.replicas: 1"),
            ),
            Some(replicas) if !is_positive_int(&replicas.value) => issues.push(Issue::new(
                self.id(),
                Severity::Error,
                replicas.line,
                "settings.replicas must be a positive integer",
            )),
            Some(_) => {}
        }

        match config.settings.get("timeout") {
            None => issues.push(
                Issue::new(
                    self.id(),
                    Severity::Warning,
                    anchor,
                    format!(
                        "settings.timeout is missing; defaulting to {}",
                        schema.default_timeout
                    ),
                )
                .with_fix(format!("Add settings.timeout: {}", schema.default_timeout)),
            ),
            Some(timeout) if !is_positive_int(&timeout.value) => issues.push(Issue::new(
                self.id(),
                Severity::Warning,
                timeout.line,
                "settings.timeout should be a positive integer",
            )),
            Some(_) => {}
        }

        issues
    }
}
