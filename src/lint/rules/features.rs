//! Feature list validation.
//!
//! The `features` section is optional. Each entry that is present must
//! be a mapping with a `name` and a boolean `enabled`.

use super::is_bool;
use crate::lint::{Issue, LintRule, LintSchema, RuleId, Severity};
use crate::scan::ParsedConfig;

/// Validates each entry of the `features` sequence.
pub struct FeaturesRule;

impl LintRule for FeaturesRule {
    fn id(&self) -> RuleId {
        RuleId::new("features")
    }

    fn name(&self) -> &str {
        "Features"
    }

    fn description(&self) -> &str {
        "Requires every feature entry to have a name and a boolean enabled flag"
    }

    fn check(&self, config: &ParsedConfig, _schema: &LintSchema) -> Vec<Issue> {
        let mut issues = Vec::new();

        for entry in &config.features {
            if entry.is_empty() {
                issues.push(Issue::new(
                    self.id(),
                    Severity::Warning,
                    entry.line,
                    "each feature entry should be a mapping",
                ));
                continue;
            }

            if entry.get("name").map_or(true, |name| name.value.is_empty()) {
                issues.push(
                    Issue::new(
                        self.id(),
                        Severity::Warning,
                        entry.line,
                        "feature entry missing name",
                    )
                    .with_fix("Add name: <feature-name>"),
                );
            }

            if !entry.get("enabled").is_some_and(|enabled| is_bool(&enabled.value)) {
                issues.push(Issue::new(
                    self.id(),
                    Severity::Warning,
                    entry.line,
                    "feature enabled should be true or false",
                ));
            }
        }

        issues
    }
}
