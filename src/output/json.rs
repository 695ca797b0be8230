//! JSON readers and writers for chart data files.

use crate::utils::error::OutputError;
use log::{debug, info};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

/// Write any serializable chart data to a pretty-printed JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_json<T: Serialize + ?Sized>(data: &T, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, data)?;

    debug!("JSON written ({} bytes)", calculate_file_size(output_path));

    Ok(())
}

/// Serialize chart data to a pretty JSON string
pub fn to_json_string<T: Serialize + ?Sized>(data: &T) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Read a JSON document from a file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_json(input_path: impl AsRef<Path>) -> Result<Value, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading JSON from: {}", input_path.display());

    let file = File::open(input_path)?;
    let value = serde_json::from_reader(BufReader::new(file))?;

    Ok(value)
}

/// Read a JSON document from any reader (e.g. stdin)
pub fn read_json_from<R: Read>(reader: R) -> Result<Value, OutputError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Validate that output path is writable
///
/// **Public** - shared by the CLI before doing any work
pub fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
