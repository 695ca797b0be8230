//! Export command: write records as a CSV download file.

use super::models::ExportArgs;
use super::utils::{read_input, validate_input};
use crate::output::{export_as_csv, FileSink};
use crate::parser::as_records;
use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

/// Execute the export command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Path of the written CSV file
pub fn execute_export(args: ExportArgs) -> Result<PathBuf> {
    let data = read_input(&args.input)?;
    if !data.is_array() {
        warn!("Input is not a JSON array, exporting an empty table");
    }

    let mut sink = FileSink::new(&args.dir);
    let file_name = export_as_csv(as_records(&data), &args.filename, &mut sink)
        .context("Failed to export CSV")?;

    let path = args.dir.join(&file_name);
    info!("✓ Exported {} rows to {}", as_records(&data).len(), path.display());

    Ok(path)
}

/// Validate export arguments
pub fn validate_export_args(args: &ExportArgs) -> Result<()> {
    validate_input(&args.input)?;

    if args.filename.contains(['/', '\\']) {
        anyhow::bail!("File name must not contain path separators: {}", args.filename);
    }

    if args.dir.exists() && !args.dir.is_dir() {
        anyhow::bail!("Export directory is a file: {}", args.dir.display());
    }

    Ok(())
}
