//! Terminal UI writing to the process streams.

use console::Term;
use std::io::Write;

use super::{should_use_colors, LintTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Status lines go to stdout; warnings, errors and diagnostics go to
/// stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: LintTheme,
    colors: bool,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let colors = should_use_colors();
        let theme = if colors {
            LintTheme::new()
        } else {
            LintTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            colors,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn emit(&mut self, text: &str) {
        self.out.write_all(text.as_bytes()).ok();
        self.out.flush().ok();
    }

    fn report(&mut self, text: &str) {
        self.err.write_all(text.as_bytes()).ok();
        self.err.flush().ok();
    }

    fn use_colors(&self) -> bool {
        self.colors
    }
}
