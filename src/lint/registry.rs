//! Rule registry for the built-in lint rules.
//!
//! The [`RuleRegistry`] keeps rules in evaluation order and provides
//! lookup by id for reporting (rule names and descriptions in SARIF
//! output and `deploylint rules`).

use super::rule::{LintRule, RuleId};
use super::rules::builtin_rules;

/// Ordered collection of lint rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a registry with all built-in rules, in evaluation order.
    pub fn with_builtins() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules
            .iter()
            .find(|rule| &rule.id() == id)
            .map(|rule| rule.as_ref())
    }

    /// Iterate over all rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.rules.iter().map(|rule| rule.id()))
            .finish()
    }
}
