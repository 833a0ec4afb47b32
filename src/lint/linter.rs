//! Issue collection.

use super::diagnostic::Issue;
use super::registry::RuleRegistry;
use super::rule::Severity;
use super::schema::LintSchema;
use crate::scan::{self, ParsedConfig};

/// Runs every registered rule over a configuration.
///
/// A `Linter` holds no per-call state and can be shared across threads.
#[derive(Debug, Default)]
pub struct Linter {
    schema: LintSchema,
    registry: RuleRegistry,
}

impl Linter {
    /// A linter with the built-in rules and schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// A linter with the built-in rules and a custom schema.
    pub fn with_schema(schema: LintSchema) -> Self {
        Self {
            schema,
            registry: RuleRegistry::with_builtins(),
        }
    }

    pub fn schema(&self) -> &LintSchema {
        &self.schema
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Scan and lint configuration text.
    pub fn lint_str(&self, text: &str) -> Vec<Issue> {
        self.check(&scan::scan(text))
    }

    /// Run the rules over an already scanned configuration.
    ///
    /// Issues are grouped by rule in registry order, never sorted by line.
    pub fn check(&self, config: &ParsedConfig) -> Vec<Issue> {
        let issues: Vec<Issue> = self
            .registry
            .iter()
            .flat_map(|rule| rule.check(config, &self.schema))
            .collect();

        tracing::debug!(
            total = issues.len(),
            errors = issues.iter().filter(|i| i.severity == Severity::Error).count(),
            "lint complete"
        );
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::RuleId;

    #[test]
    fn empty_text_reports_both_required_sections() {
        let issues = Linter::new().lint_str("");

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].message, "missing metadata section");
        assert_eq!(issues[1].message, "missing settings section");
        assert!(issues.iter().all(|i| i.line == 1));
    }

    #[test]
    fn issues_are_grouped_by_rule_not_line() {
        let text = "features:\n  - name: a\nsettings:\n  replicas: 0\n  timeout: 5\nmetadata:\n  name: api\n  env: dev\n";
        let issues = Linter::new().lint_str(text);

        let rules: Vec<_> = issues.iter().map(|i| i.rule_id.clone()).collect();
        assert_eq!(rules, vec![RuleId::new("settings"), RuleId::new("features")]);
        assert_eq!(issues[0].line, 4);
        assert_eq!(issues[1].line, 2);
    }

    #[test]
    fn custom_schema_is_used() {
        let schema = LintSchema {
            allowed_envs: &["qa"],
            default_timeout: 30,
        };
        let linter = Linter::with_schema(schema);
        let issues = linter.lint_str("metadata:\n  name: a\n  env: qa\nsettings:\n  replicas: 1\n  timeout: 1\n");
        assert!(issues.is_empty());
        assert_eq!(linter.schema().allowed_envs, &["qa"]);
    }

    #[test]
    fn linter_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Linter>();
    }
}
