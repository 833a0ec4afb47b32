//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use deploylint::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.report("deploy.yaml:\n");
//! ui.error("deploy.yaml: file missing");
//!
//! assert_eq!(ui.stderr(), "deploy.yaml:\n");
//! assert!(ui.errors().contains(&"deploy.yaml: file missing".to_string()));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions. Quiet mode suppresses captured messages
/// the same way the terminal does.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    stdout: String,
    stderr: String,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Everything passed to [`UserInterface::emit`].
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Everything passed to [`UserInterface::report`].
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Check if a message was displayed.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if an error was displayed.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|e| e.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.messages.push(msg.to_string());
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.successes.push(msg.to_string());
        }
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn emit(&mut self, text: &str) {
        self.stdout.push_str(text);
    }

    fn report(&mut self, text: &str) {
        self.stderr.push_str(text);
    }

    fn use_colors(&self) -> bool {
        false
    }
}
