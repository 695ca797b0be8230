//! Typed chart data shapes produced by the transformations.
//!
//! These serialize to the same flat JSON objects the chart components consume.

use super::record::{number_field, Record};
use crate::utils::config::{DEFAULT_NAME_FIELD, DEFAULT_VALUE_FIELD};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// One chart data point with its original extra fields carried along
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledValue {
    /// Display label
    pub name: String,

    /// Numeric value, always finite
    #[serde(serialize_with = "serialize_number")]
    pub value: f64,

    /// Every other field of the source record
    #[serde(flatten)]
    pub extra: Record,
}

impl LabeledValue {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            extra: Record::new(),
        }
    }

    /// Attach an extra field, ignoring attempts to shadow `name`/`value`
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if key != DEFAULT_NAME_FIELD && key != DEFAULT_VALUE_FIELD {
            self.extra.insert(key, value);
        }
        self
    }

    /// Flatten back into a plain JSON record
    pub fn into_record(self) -> Record {
        let mut record = self.extra;
        record.insert(DEFAULT_NAME_FIELD.to_string(), Value::String(self.name));
        record.insert(DEFAULT_VALUE_FIELD.to_string(), json_number(self.value));
        record
    }
}

impl From<LabeledValue> for Value {
    fn from(labeled: LabeledValue) -> Self {
        Value::Object(labeled.into_record())
    }
}

/// Running sum and count for one distinct grouping key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationBucket {
    /// Grouping key
    pub name: String,

    /// Sum of the aggregated field
    #[serde(serialize_with = "serialize_number")]
    pub value: f64,

    /// Number of records that contributed
    pub count: usize,
}

impl AggregationBucket {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: 0.0,
            count: 0,
        }
    }

    /// Fold one more record's value into the bucket
    pub fn add(&mut self, value: f64) {
        self.value += value;
        self.count += 1;
    }
}

/// Anything that exposes a numeric `value` for ordering
pub trait Valued {
    fn numeric_value(&self) -> f64;
}

impl Valued for Value {
    fn numeric_value(&self) -> f64 {
        number_field(self, DEFAULT_VALUE_FIELD)
    }
}

impl Valued for LabeledValue {
    fn numeric_value(&self) -> f64 {
        self.value
    }
}

impl Valued for AggregationBucket {
    fn numeric_value(&self) -> f64 {
        self.value
    }
}

/// Serialize whole floats as integers so `12.0` goes out as `12`
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    json_number(*value).serialize(serializer)
}

/// Build a JSON number, preferring an integer representation when exact
pub(crate) fn json_number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::from(0))
    }
}
