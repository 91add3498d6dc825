//! Configuration for recipe tree scanning.
//!
//! The line grammars themselves have no knobs; everything configurable here
//! is about how `recipe.txt` files are discovered and read. This keeps the
//! `recipe-format` core free of filesystem concerns.

use std::path::PathBuf;

/// Filesystem scan options.
///
/// NOTE: `paths` is required and must be non-empty. Default scan roots are a
/// CLI/wrapper concern, not baked into the library — keeps `recipe-validator`
/// repo-layout-agnostic.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ScanConfig {
    /// Paths to scan (files or directories). Required, must be non-empty.
    pub paths: Vec<PathBuf>,
    /// Exclude patterns (glob format).
    pub exclude: Vec<String>,
    /// Maximum file size in bytes (default: 10 MB).
    pub max_file_size: u64,
    /// Whether to follow symbolic links.
    ///
    /// **Defaults to `false`** — following symlinks allows escaping the scan
    /// root, traversing system directories, and reading secrets in CI
    /// environments. Only enable if you explicitly trust all symlinks in the
    /// tree being scanned.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    /// Prevents infinite recursion via deeply nested symlinks or directories.
    pub max_depth: usize,
    /// Maximum total number of files to check (default: `100_000`).
    /// Prevents memory exhaustion on pathological trees.
    pub max_files: usize,
    /// Maximum total bytes to read across all files (default: 512 MB).
    /// Prevents memory exhaustion when many large files are present.
    pub max_total_bytes: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            exclude: Vec::new(),
            max_file_size: 10_485_760,
            follow_links: false,
            max_depth: 64,
            max_files: 100_000,
            max_total_bytes: 536_870_912,
        }
    }
}
