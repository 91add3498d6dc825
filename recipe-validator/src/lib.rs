//! # recipe-validator
//!
//! Recipe format validator for `recipe.txt` cookbook trees.
//!
//! Walks the given paths, collects every file whose base name is exactly
//! `recipe.txt`, and validates each one against the line grammars in
//! [`recipe_format`]. Per-file verdicts and scan-level failures are gathered
//! into a single [`ValidationReport`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use recipe_validator::{ScanConfig, validate_tree};
//!
//! let mut config = ScanConfig::default();
//! config.paths = vec![PathBuf::from("cookbook")];
//! config.exclude = vec!["drafts/*".to_owned()];
//!
//! let report = validate_tree(&config).unwrap();
//! println!("Files checked: {}", report.checked_files);
//! println!("Format violations: {}", report.errors_count());
//! println!("Scan errors: {}", report.scan_errors.len());
//! println!("OK: {}", report.ok);
//! ```

mod config;
mod error;
pub mod output;
mod report;
mod strategy;

pub use config::ScanConfig;
pub use error::{ScanError, ScanErrorKind};
pub use report::{FileReport, ValidationReport};

use recipe_format::validate_document;
use strategy::fs::{ScanResult, find_files, read_file_bounded};

/// Validate every `recipe.txt` file under the given paths.
///
/// This is the primary public API.
///
/// # Errors
///
/// Returns an error if `config.paths` is empty or if any provided path does
/// not exist. Returns `Ok` with `checked_files: 0` if paths exist but
/// contain no `recipe.txt` files. Scan failures (unreadable files, oversized
/// files, etc.) are reported in `report.scan_errors` and never silently
/// discarded.
pub fn validate_tree(config: &ScanConfig) -> anyhow::Result<ValidationReport> {
    if config.paths.is_empty() {
        anyhow::bail!("No paths provided for validation");
    }

    for path in &config.paths {
        if !path.exists() {
            anyhow::bail!("Path does not exist: {}", path.display());
        }
    }

    let (candidates, mut scan_errors) = find_files(config);

    if candidates.is_empty() && scan_errors.is_empty() {
        return Ok(ValidationReport {
            checked_files: 0,
            failed_files: 0,
            ok: true,
            files: vec![],
            scan_errors: vec![],
        });
    }

    let mut files = Vec::with_capacity(candidates.len());
    let mut checked_files: usize = 0;
    // Discovery-stage failures (walk errors, boundary violations,
    // canonicalization errors) are already in scan_errors from find_files.
    // Count them as failed files upfront.
    let mut failed_files: usize = scan_errors.len();
    let mut total_bytes: u64 = 0;

    for file_path in &candidates {
        if checked_files + failed_files >= config.max_files {
            scan_errors.push(ScanError {
                file: file_path.clone(),
                kind: ScanErrorKind::LimitExceeded,
                message: format!(
                    "Scan aborted: max_files limit ({}) reached; remaining files not checked",
                    config.max_files
                ),
            });
            failed_files += 1;
            break;
        }

        let content = match read_file_bounded(file_path, config.max_file_size) {
            ScanResult::Ok(c) => c,
            ScanResult::Err(e) => {
                scan_errors.push(e);
                failed_files += 1;
                continue;
            }
        };

        let file_bytes = content.len() as u64;
        if total_bytes.saturating_add(file_bytes) > config.max_total_bytes {
            scan_errors.push(ScanError {
                file: file_path.clone(),
                kind: ScanErrorKind::LimitExceeded,
                message: format!(
                    "Scan aborted: max_total_bytes limit ({}) reached; remaining files not checked",
                    config.max_total_bytes
                ),
            });
            failed_files += 1;
            break;
        }
        total_bytes = total_bytes.saturating_add(file_bytes);

        // Fail-fast per document: the verdict carries at most one violation.
        // A bad file never stops the run; every candidate gets a verdict.
        let verdict = validate_document(content.lines());
        checked_files += 1;
        files.push(FileReport {
            file: file_path.clone(),
            verdict,
        });
    }

    let ok = files.iter().all(FileReport::is_valid) && scan_errors.is_empty();
    Ok(ValidationReport {
        checked_files,
        failed_files,
        ok,
        files,
        scan_errors,
    })
}
