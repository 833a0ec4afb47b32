//! Fixed rule configuration shared by the validators.

/// Immutable values the validators check against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintSchema {
    /// Values accepted for `metadata.env`, in display order.
    pub allowed_envs: &'static [&'static str],
    /// Timeout assumed when `settings.timeout` is missing.
    pub default_timeout: u32,
}

impl LintSchema {
    /// The built-in schema.
    pub const DEFAULT: LintSchema = LintSchema {
        allowed_envs: &["dev", "staging", "prod"],
        default_timeout: 30,
    };

    /// Whether `env` is one of the allowed environments.
    pub fn is_allowed_env(&self, env: &str) -> bool {
        self.allowed_envs.contains(&env)
    }

    /// Allowed environments joined for messages, e.g. `dev, staging, prod`.
    pub fn allowed_list(&self) -> String {
        self.allowed_envs.join(", ")
    }
}

impl Default for LintSchema {
    fn default() -> Self {
        Self::DEFAULT
    }
}
