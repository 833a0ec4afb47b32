//! Check command implementation.
//!
//! The `deploylint check` command lints one or more configuration files
//! and reports issues in the requested format.

use std::path::Path;

use crate::cli::args::CheckArgs;
use crate::error::{LintError, Result};
use crate::lint::{
    lint_file, lint_reader, FileReport, HumanFormatter, Issue, JsonFormatter, LintFormatter,
    OutputFormat, SarifFormatter,
};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Exit code for fatal issues or unreadable inputs.
pub const EXIT_FATAL: i32 = 2;

/// Path argument that reads standard input.
pub const STDIN_PATH: &str = "-";

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn lint_path(&self, path: &Path) -> Result<Vec<Issue>> {
        if path == Path::new(STDIN_PATH) {
            lint_reader(std::io::stdin().lock()).map_err(|source| LintError::Read {
                path: path.to_path_buf(),
                source,
            })
        } else {
            lint_file(path)
        }
    }

    fn render(write: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> Result<String> {
        let mut buf = Vec::new();
        write(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn output_human(&self, reports: &[FileReport], ui: &mut dyn UserInterface) -> Result<()> {
        let formatter = HumanFormatter::new(ui.use_colors(), self.args.fix_suggestions);

        for report in reports {
            if report.is_clean() {
                let line = Self::render(|w| formatter.write_clean(&report.path, w))?;
                ui.message(line.trim_end());
            } else {
                ui.report(&Self::render(|w| formatter.write_issues(report, w))?);
            }
        }

        ui.report(&Self::render(|w| formatter.write_summary(reports, w))?);
        Ok(())
    }

    fn output(&self, reports: &[FileReport], ui: &mut dyn UserInterface) -> Result<()> {
        match self.args.format {
            OutputFormat::Human => self.output_human(reports, ui)?,
            OutputFormat::Json => {
                let formatter = JsonFormatter::new(self.args.strict);
                ui.emit(&Self::render(|w| formatter.format(reports, w))?);
            }
            OutputFormat::Sarif => {
                let formatter = SarifFormatter::new("deploylint", env!("CARGO_PKG_VERSION"));
                ui.emit(&Self::render(|w| formatter.format(reports, w))?);
            }
        }
        Ok(())
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut reports = Vec::with_capacity(self.args.paths.len());
        let mut unreadable = 0;

        for path in &self.args.paths {
            match self.lint_path(path) {
                Ok(issues) => {
                    tracing::debug!(path = %path.display(), issues = issues.len(), "linted");
                    reports.push(FileReport::new(path.display().to_string(), issues));
                }
                Err(err) => {
                    ui.error(&err.to_string());
                    unreadable += 1;
                }
            }
        }

        self.output(&reports, ui)?;

        let fatal = reports.iter().any(|r| r.is_fatal(self.args.strict));
        if fatal || unreadable > 0 {
            Ok(CommandResult::failure(EXIT_FATAL))
        } else {
            Ok(CommandResult::success())
        }
    }
}
