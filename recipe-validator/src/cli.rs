//! Command-line interface for the recipe validator.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use recipe_validator::{ScanConfig, ValidationReport, output, validate_tree};

/// Validate `recipe.txt` files against the cookbook format.
#[derive(Parser, Debug)]
#[command(
    name = "recipe-validator",
    version,
    about = "Validate recipe.txt files against the cookbook format"
)]
pub struct Cli {
    /// Files or directories to scan (default: current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Glob patterns for paths to skip (repeatable)
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Emit the report as JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Follow symbolic links while scanning
    #[arg(long)]
    pub follow_links: bool,

    /// Maximum file size in bytes (default: 10 MB)
    #[arg(long, value_name = "BYTES")]
    pub max_file_size: Option<u64>,
}

/// Parse arguments, run the scan, and write the report to stdout.
///
/// Returns the report so `main` can derive the process exit status from
/// `report.ok`.
///
/// # Errors
///
/// Returns an error if a scan path does not exist or the report cannot be
/// written.
pub fn run() -> anyhow::Result<ValidationReport> {
    let cli = Cli::parse();

    let mut config = ScanConfig::default();
    config.paths = if cli.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        cli.paths
    };
    config.exclude = cli.exclude;
    config.follow_links = cli.follow_links;
    if let Some(max_file_size) = cli.max_file_size {
        config.max_file_size = max_file_size;
    }

    let report = validate_tree(&config)?;

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    if cli.json {
        output::write_json(&report, &mut writer)?;
    } else {
        output::write_human(&report, &mut writer)?;
    }
    writer.flush()?;

    Ok(report)
}
