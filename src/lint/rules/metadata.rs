//! Metadata section validation.
//!
//! Checks that `metadata` exists and carries a `name` and a recognized
//! `env`.

use crate::lint::{Issue, LintRule, LintSchema, RuleId, Severity};
use crate::scan::{ParsedConfig, Section};

/// Validates the `metadata` section.
pub struct MetadataRule;

impl LintRule for MetadataRule {
    fn id(&self) -> RuleId {
        RuleId::new("metadata")
    }

    fn name(&self) -> &str {
        "Metadata"
    }

    fn description(&self) -> &str {
        "Requires metadata.name and a metadata.env from the allowed environments"
    }

    fn check(&self, config: &ParsedConfig, schema: &LintSchema) -> Vec<Issue> {
        let mut issues = Vec::new();
        let anchor = config.anchor(Section::Metadata);

        if config.metadata.is_empty() {
            issues.push(
                Issue::new(self.id(), Severity::Error, anchor, "missing metadata section")
                    .with_fix("Add a 'metadata' mapping with 'name' and 'env' fields"),
            );
            return issues;
        }

        let name = config.metadata.get("name");
        if name.map_or(true, |field| field.value.is_empty()) {
            issues.push(
                Issue::new(
                    self.id(),
                    Severity::Error,
                    name.map_or(anchor, |field| field.line),
                    "metadata.name is required",
                )
                .with_fix(
                    "Set metadata.name to a non-empty identifier, e.g. metadata.name: my-service",
                ),
            );
        }

        match config.metadata.get("env") {
            Some(env) if !env.value.is_empty() => {
                if !schema.is_allowed_env(&env.value) {
                    issues.push(
                        Issue::new(
                            self.id(),
                            Severity::Warning,
                            env.line,
                            format!("metadata.env value {:?} is not recognized", env.value),
                        )
                        .with_fix(format!("Use one of: {}", schema.allowed_list())),
                    );
                }
            }
            env => {
                issues.push(
                    Issue::new(
                        self.id(),
                        Severity::Error,
                        env.map_or(anchor, |field| field.line),
                        "metadata.env is required",
                    )
                    .with_fix(format!(
                        "Set metadata.env to one of: {}",
                        schema.allowed_list()
                    )),
                );
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan;

    fn check(text: &str) -> Vec<Issue> {
        MetadataRule.check(&scan(text), &LintSchema::DEFAULT)
    }

    #[test]
    fn passes_valid_metadata() {
        assert!(check("metadata:\n  name: api\n  env: staging\n").is_empty());
    }

    #[test]
    fn missing_section_stops_further_checks() {
        let issues = check("settings:\n  replicas: 1\n");

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "missing metadata section");
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].line, 1);
        assert_eq!(
            issues[0].suggested_fix.as_deref(),
            Some("Add a 'metadata' mapping with 'name' and 'env' fields")
        );
    }

    #[test]
    fn empty_section_is_reported_at_header() {
        let issues = check("settings:\n  replicas: 1\nmetadata:\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 3);
    }

    #[test]
    fn missing_name_is_reported_at_anchor() {
        let issues = check("# deploy\nmetadata:\n  env: dev\n");

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "metadata.name is required");
        assert_eq!(issues[0].line, 2);
    }

    #[test]
    fn empty_name_is_reported_at_field() {
        let issues = check("metadata:\n  env: dev\n  name: \"\"\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 3);
    }

    #[test]
    fn missing_env_suggests_allowed_values() {
        let issues = check("metadata:\n  name: api\n");

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "metadata.env is required");
        assert_eq!(
            issues[0].suggested_fix.as_deref(),
            Some("Set metadata.env to one of: dev, staging, prod")
        );
    }

    #[test]
    fn unknown_env_is_a_warning_at_field_line() {
        let issues = check("metadata:\n  name: api\n  env: production\n");

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].line, 3);
        assert_eq!(
            issues[0].message,
            "metadata.env value \"production\" is not recognized"
        );
        assert_eq!(
            issues[0].suggested_fix.as_deref(),
            Some("Use one of: dev, staging, prod")
        );
    }

    #[test]
    fn name_issue_precedes_env_issue() {
        let issues = check("metadata:\n  owner: ops\n");
        let messages: Vec<_> = issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["metadata.name is required", "metadata.env is required"]
        );
    }

    #[test]
    fn issues_carry_rule_id() {
        let issues = check("");
        assert_eq!(issues[0].rule_id, RuleId::new("metadata"));
    }
}
