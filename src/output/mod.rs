//! Output formatting and writers.
//!
//! This module handles getting chart data out of the process:
//! - Locale-aware number labels
//! - CSV exports through pluggable sinks
//! - JSON files

pub mod csv;
pub mod json;
pub mod number;

// Re-export main functions
pub use self::csv::{csv_text, export_as_csv, CsvSink, FileSink, MemorySink};
pub use json::{read_json, read_json_from, to_json_string, validate_output_path, write_json};
pub use number::{format_f64, format_number, to_fixed, Locale, NumberFormatOptions};
