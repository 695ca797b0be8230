//! Configuration and constants shared by the library and the CLI.

use std::time::Duration;

/// Default timeout for analytics API requests
pub const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(10);

/// Default analytics API base address
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Environment variable overriding the API base address
pub const API_URL_ENV: &str = "FARMWATCH_API_URL";

/// Environment variable holding a bearer token for the API
pub const API_TOKEN_ENV: &str = "FARMWATCH_API_TOKEN";

// Field names used when the caller doesn't supply a mapping
pub const DEFAULT_NAME_FIELD: &str = "name";
pub const DEFAULT_VALUE_FIELD: &str = "value";
pub const DEFAULT_DATE_FIELD: &str = "timestamp";
pub const PERCENTAGE_FIELD: &str = "percentage";

/// Default color-bucket thresholds (inclusive upper bounds)
pub const DEFAULT_LOW_THRESHOLD: f64 = 30.0;
pub const DEFAULT_MEDIUM_THRESHOLD: f64 = 70.0;

/// Ten-color chart palette, cycled when more series are needed
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#3b82f6",
    "#8b5cf6", "#ec4899", "#06b6d4", "#84cc16", "#f59e0b",
];

/// Base name for CSV downloads when none is given
pub const DEFAULT_EXPORT_FILENAME: &str = "chart-data";

/// Header row written at the top of every CSV export
pub const CSV_HEADER: [&str; 3] = ["Name", "Value", "Percentage"];

/// Default time-series window requested from the API
pub const DEFAULT_TIME_SERIES_PERIOD: &str = "30d";
