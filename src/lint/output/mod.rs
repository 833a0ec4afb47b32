//! Lint output formatters.
//!
//! This module provides formatters for outputting lint results
//! in different formats (human-readable, JSON, SARIF).

pub mod human;
pub mod json;
pub mod sarif;

use crate::lint::FileReport;
use std::io::Write;

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Sarif,
}

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format per-file reports to the given writer.
    fn format<W: Write>(&self, reports: &[FileReport], writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use sarif::SarifFormatter;
