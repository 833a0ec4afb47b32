//! Human-readable output formatter.
//!
//! Formats lint results for terminal display with optional color support.
//! A clean file is a single `<path>: OK` line. A file with issues gets a
//! `<path>:` header followed by one indented line per issue.

use super::LintFormatter;
use crate::lint::FileReport;
use crate::ui::LintTheme;
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
    /// Whether to print fix suggestions under each issue.
    pub show_fixes: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool, show_fixes: bool) -> Self {
        Self {
            use_color,
            show_fixes,
        }
    }

    fn theme(&self) -> LintTheme {
        if self.use_color {
            LintTheme::new()
        } else {
            LintTheme::plain()
        }
    }

    /// Write the line for a file without issues.
    pub fn write_clean<W: Write>(&self, path: &str, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{}: {}", path, self.theme().success.apply_to("OK"))
    }

    /// Write the header and issue lines for one file.
    pub fn write_issues<W: Write>(
        &self,
        report: &FileReport,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let theme = self.theme();
        writeln!(writer, "{}:", report.path)?;

        for issue in &report.issues {
            writeln!(
                writer,
                "  {}:{} {} {}",
                report.path,
                issue.line,
                theme.severity_tag(issue.severity),
                issue.message
            )?;

            if self.show_fixes {
                if let Some(ref fix) = issue.suggested_fix {
                    writeln!(writer, "    {} {}", theme.hint.apply_to("Fix suggestion:"), fix)?;
                }
            }
        }

        Ok(())
    }

    /// Write the closing `Found N error(s) and M warning(s)` line.
    ///
    /// Nothing is written when no file had issues.
    pub fn write_summary<W: Write>(
        &self,
        reports: &[FileReport],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let error_count: usize = reports.iter().map(FileReport::errors).sum();
        let warning_count: usize = reports.iter().map(FileReport::warnings).sum();

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        }

        Ok(())
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()> {
        for report in reports {
            if report.is_clean() {
                self.write_clean(&report.path, writer)?;
            } else {
                self.write_issues(report, writer)?;
            }
        }

        self.write_summary(reports, writer)
    }
}
