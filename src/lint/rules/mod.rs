//! Built-in lint rules.
//!
//! One rule per section. They always run in the order returned by
//! [`builtin_rules`].

pub mod features;
pub mod metadata;
pub mod settings;

pub use features::FeaturesRule;
pub use metadata::MetadataRule;
pub use settings::SettingsRule;

use super::rule::LintRule;

/// The built-in rules in evaluation order: metadata, settings, features.
pub fn builtin_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        Box::new(MetadataRule),
        Box::new(SettingsRule),
        Box::new(FeaturesRule),
    ]
}

/// Base-10 integer strictly greater than zero.
pub(crate) fn is_positive_int(value: &str) -> bool {
    value.parse::<i64>().is_ok_and(|n| n > 0)
}

/// `true` or `false`, ignoring ASCII case.
pub(crate) fn is_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false")
}
