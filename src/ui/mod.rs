//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can be tested without a terminal
//! - [`TerminalUI`] writing to stdout and stderr
//! - [`MockUI`] capturing everything for assertions
//! - [`LintTheme`] colors for lint output
//!
//! # Example
//!
//! ```
//! use deploylint::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("deploy.yaml: OK");
//! assert_eq!(ui.messages(), &["deploy.yaml: OK".to_string()]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, LintTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Print a status line to stdout. Suppressed in quiet mode.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message on stderr.
    fn error(&mut self, msg: &str);

    /// Write pre-formatted machine output (JSON, SARIF, completions) to
    /// stdout, regardless of output mode.
    fn emit(&mut self, text: &str);

    /// Write a pre-formatted diagnostic block to stderr, regardless of
    /// output mode.
    fn report(&mut self, text: &str);

    /// Whether colored output should be used.
    fn use_colors(&self) -> bool;
}
