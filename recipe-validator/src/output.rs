//! Shared output formatting for validation reports.
//!
//! Provides JSON and plain-text formatters for `ValidationReport`.
//! Color/terminal formatting is intentionally excluded from this core
//! module — that concern belongs to the CLI layer.
//!
//! The plain-text format is a stable contract: one `Checking {path}` line
//! per file in check order, a three-line violation block after each failing
//! file, and a single summary line. Scripts parse these strings, so changes
//! here are breaking changes.

use std::io::Write;

use recipe_format::Verdict;

use crate::report::ValidationReport;

/// Format a `ValidationReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ValidationReport` as human-readable plain text to a writer.
///
/// Color/ANSI formatting is the responsibility of the caller (CLI layer).
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    for entry in &report.files {
        writeln!(writer, "Checking {}", entry.file.display())?;
        if let Verdict::Invalid(violation) = &entry.verdict {
            writeln!(
                writer,
                "File does not follow the specified format. Error {}:",
                violation.code
            )?;
            writeln!(writer, "{}", violation.detail)?;
            writeln!(writer)?;
        }
    }

    if !report.scan_errors.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "SCAN ERRORS (files that could not be checked)")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for scan_err in &report.scan_errors {
            writeln!(writer, "{}", scan_err.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    let errors = report.errors_count();
    if errors > 0 {
        writeln!(writer, "Found {errors} errors.")?;
    }
    if !report.scan_errors.is_empty() {
        writeln!(writer, "{} file(s) could not be scanned.", report.failed_files)?;
    }
    if report.ok {
        writeln!(writer, "All recipe.txt files follow the specified format.")?;
    }

    Ok(())
}
