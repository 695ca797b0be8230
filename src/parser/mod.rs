//! Record access, coercion and typed chart shapes.
//!
//! This module handles:
//! - Viewing raw JSON as a collection of records
//! - Best-effort extraction of names, numbers and dates
//! - The typed outputs of the chart transformations

pub mod dates;
pub mod record;
pub mod schema;

// Re-export main types
pub use dates::{parse_date_str, parse_instant};
pub use record::{as_records, coerce_label, coerce_number, field, number_field, FieldMapping, Record};
pub use schema::{AggregationBucket, LabeledValue, Valued};
