//! Best-effort field access over loosely-typed chart records.
//!
//! Upstream data arrives as plain JSON objects with no schema. Every accessor
//! here is total: missing fields, wrong types and garbage strings collapse to
//! a neutral default instead of an error.

use crate::utils::config::{DEFAULT_NAME_FIELD, DEFAULT_VALUE_FIELD};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single chart record as received from upstream
pub type Record = Map<String, Value>;

/// Which fields carry the label and the numeric value of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMapping {
    /// Field holding the display label
    pub name_field: String,

    /// Field holding the numeric value
    pub value_field: String,
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            name_field: DEFAULT_NAME_FIELD.to_string(),
            value_field: DEFAULT_VALUE_FIELD.to_string(),
        }
    }
}

impl FieldMapping {
    /// Create a mapping, substituting the defaults for blank field names
    pub fn new(name_field: impl Into<String>, value_field: impl Into<String>) -> Self {
        let name_field = name_field.into();
        let value_field = value_field.into();
        let defaults = Self::default();

        Self {
            name_field: if name_field.trim().is_empty() { defaults.name_field } else { name_field },
            value_field: if value_field.trim().is_empty() { defaults.value_field } else { value_field },
        }
    }
}

/// View any JSON value as a sequence of records
///
/// Anything other than an array is treated as an empty collection.
pub fn as_records(data: &Value) -> &[Value] {
    match data {
        Value::Array(items) => items.as_slice(),
        _ => &[],
    }
}

/// Look up a field, treating `null` the same as a missing key
pub fn field<'a>(record: &'a Value, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|v| !v.is_null())
}

/// Coerce an optional JSON value to a finite number
///
/// Numbers pass through, numeric strings are parsed, booleans map to 1/0.
/// Everything else, including NaN and infinities, becomes 0.
pub fn coerce_number(value: Option<&Value>) -> f64 {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => parse_numeric_str(s),
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };

    if number.is_finite() {
        number
    } else {
        0.0
    }
}

/// Read a numeric field from a record, defaulting to 0
pub fn number_field(record: &Value, key: &str) -> f64 {
    coerce_number(field(record, key))
}

/// Coerce an optional JSON value to a display label
pub fn coerce_label(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.as_f64().map(format_js_number).unwrap_or_else(|| n.to_string())),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Render a number the way a browser prints it: `12` rather than `12.0`
pub fn format_js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Also folds -0 into "0"
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e21 {
        return format!("{:.0}", value);
    }
    format!("{}", value)
}

fn parse_numeric_str(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(0.0)
}
