//! Error types for the entire library.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//! The chart transformations themselves are total and never return errors.

use thiserror::Error;

/// Errors that can occur while talking to the analytics API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unauthorized: the API rejected the supplied credentials")]
    Unauthorized,

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Invalid API address: {0}")]
    InvalidUrl(String),
}

/// Errors that can occur while exporting chart data as CSV
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write export: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to encode CSV: {0}")]
    CsvFailed(#[from] csv::Error),

    #[error("Invalid export path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur during JSON file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
