//! JSON output formatter.
//!
//! Formats lint results as machine-readable JSON for tooling integration.
//! Issues use the same wire shape as the HTTP service.

use super::LintFormatter;
use crate::lint::{is_fatal, FileReport, Issue};
use serde::Serialize;
use std::io::Write;

/// Formats lint output as JSON.
pub struct JsonFormatter {
    /// Whether warnings count as fatal.
    pub strict: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    files: Vec<JsonFile<'a>>,
    strict: bool,
    fatal: bool,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: &'a str,
    issues: &'a [Issue],
    fatal: bool,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()> {
        let files: Vec<_> = reports
            .iter()
            .map(|report| JsonFile {
                path: &report.path,
                issues: &report.issues,
                fatal: is_fatal(&report.issues, self.strict),
            })
            .collect();

        let summary = JsonSummary {
            total: reports.iter().map(|r| r.issues.len()).sum(),
            errors: reports.iter().map(FileReport::errors).sum(),
            warnings: reports.iter().map(FileReport::warnings).sum(),
        };

        let output = JsonOutput {
            fatal: files.iter().any(|f| f.fatal),
            files,
            strict: self.strict,
            summary,
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
