//! Validation report types.

use std::path::PathBuf;

use recipe_format::Verdict;
use serde::Serialize;

use crate::error::ScanError;

/// Outcome for a single checked file.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct FileReport {
    /// Path of the `recipe.txt` file, as discovered.
    pub file: PathBuf,
    /// Validation verdict for the document.
    pub verdict: Verdict,
}

impl FileReport {
    /// Whether this file passed validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.verdict.is_valid()
    }
}

/// Result of a validation run.
///
/// CI pipelines must check both the per-file verdicts and `scan_errors`.
/// A non-empty `scan_errors` means the validator did not fully cover the
/// tree — treat this as a build failure regardless of the verdicts.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Number of files successfully read and checked.
    pub checked_files: usize,
    /// Number of files that could not be checked (read failures).
    pub failed_files: usize,
    /// Whether every checked file passed AND no scan errors occurred.
    pub ok: bool,
    /// Per-file verdicts, in the order the files were checked.
    pub files: Vec<FileReport>,
    /// Scan-level errors: files that could not be read at all.
    /// Non-empty means the validator did not fully cover the tree.
    pub scan_errors: Vec<ScanError>,
}

impl ValidationReport {
    /// Total number of files attempted (checked + failed).
    #[must_use]
    pub fn files_attempted(&self) -> usize {
        self.checked_files + self.failed_files
    }

    /// Number of checked files that violate the format.
    #[must_use]
    pub fn errors_count(&self) -> usize {
        self.files.iter().filter(|entry| !entry.is_valid()).count()
    }
}
