use crate::output::{
    format_number, read_json, read_json_from, to_json_string, validate_output_path, write_json,
    NumberFormatOptions,
};
use crate::palette::{color_bucket, generate_color_palette, Thresholds};
use anyhow::{Context, Result};
use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::io;
use std::path::Path;

use super::models::InputSource;

/// Read the JSON document a command operates on
pub fn read_input(input: &InputSource) -> Result<Value> {
    match input {
        InputSource::Stdin => {
            debug!("Reading JSON from stdin");
            read_json_from(io::stdin().lock()).context("Failed to read JSON from stdin")
        }
        InputSource::File(path) => {
            read_json(path).with_context(|| format!("Failed to read JSON from {}", path.display()))
        }
    }
}

/// Write a command's result to a file, or pretty-print it to stdout
pub fn emit_output<T: Serialize + ?Sized>(data: &T, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            write_json(data, path).with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            println!("{}", to_json_string(data)?);
        }
    }
    Ok(())
}

/// Reject unusable output paths before doing any work
pub fn validate_output(output: Option<&Path>) -> Result<()> {
    if let Some(path) = output {
        validate_output_path(path)?;
    }
    Ok(())
}

/// Reject an input file that doesn't exist before doing any work
pub fn validate_input(input: &InputSource) -> Result<()> {
    if let InputSource::File(path) = input {
        if !path.is_file() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
    }
    Ok(())
}

/// Print `count` palette colors as a JSON array
pub fn display_palette(count: usize, palette: Option<&[String]>) -> Result<()> {
    let colors = generate_color_palette(count, palette);
    println!("{}", to_json_string(&colors)?);
    Ok(())
}

/// Print the color bucket for a KPI value
pub fn display_color(value: f64, thresholds: &Thresholds) {
    let token = color_bucket(value, thresholds);
    println!("{} ({})", token, token.hex());
}

/// Format a raw CLI value for display
///
/// Numbers are formatted; anything else is echoed back untouched.
pub fn display_format(raw: &str, options: &NumberFormatOptions) {
    println!("{}", format_raw(raw, options));
}

fn format_raw(raw: &str, options: &NumberFormatOptions) -> String {
    let value = serde_json::from_str::<Value>(raw.trim()).unwrap_or_else(|_| Value::String(raw.to_string()));

    match format_number(&value, options) {
        Value::String(formatted) => formatted,
        _ => raw.to_string(),
    }
}
