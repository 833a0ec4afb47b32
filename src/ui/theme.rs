//! Visual theme and styling.

use console::Style;

use crate::lint::Severity;

/// Colors used for lint output.
#[derive(Debug, Clone)]
pub struct LintTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning tags and messages (orange).
    pub warning: Style,
    /// Style for error tags and messages (red bold).
    pub error: Style,
    /// Style for fix suggestions (magenta dim).
    pub hint: Style,
    /// Style for labels in listings (bold).
    pub key: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for LintTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LintTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            hint: Style::new().magenta().dim(),
            key: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            hint: Style::new(),
            key: Style::new(),
            dim: Style::new(),
        }
    }

    /// `[error]` or `[warn]`, colored by severity.
    pub fn severity_tag(&self, severity: Severity) -> String {
        let style = match severity {
            Severity::Error => &self.error,
            Severity::Warning => &self.warning,
        };
        format!("{}", style.apply_to(format!("[{}]", severity)))
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
