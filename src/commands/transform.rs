//! Transformation commands: normalize, percentages, aggregate, filter, sort.
//!
//! Each command:
//! 1. Reads a JSON array of records
//! 2. Applies one chart-data transformation
//! 3. Writes the result as JSON

use super::models::{TransformArgs, TransformKind};
use super::utils::{emit_output, read_input, validate_input, validate_output};
use crate::aggregator::{aggregate_by_field, compute_percentages, filter_by_date_range, normalize, sort_by_value};
use crate::parser::{as_records, parse_date_str};
use anyhow::{Context, Result};
use log::{info, warn};
use serde_json::Value;
use std::time::Instant;

/// Execute a transformation command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input file missing or not valid JSON
/// * Output file cannot be written
pub fn execute_transform(args: TransformArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Running {} over {:?}", args.kind.name(), args.input);

    let data = read_input(&args.input)?;
    if !data.is_array() {
        warn!("Input is not a JSON array, treating it as empty");
    }

    let result = apply_transform(&data, &args.kind)
        .with_context(|| format!("Failed to run {}", args.kind.name()))?;

    info!(
        "{}: {} records in, {} out",
        args.kind.name(),
        as_records(&data).len(),
        as_records(&result).len()
    );

    emit_output(&result, args.output.as_deref())?;

    info!("Completed in {:.3}s", start_time.elapsed().as_secs_f64());

    Ok(())
}

/// Apply one transformation to an in-memory document
///
/// **Public** - the pure core of [`execute_transform`]
pub fn apply_transform(data: &Value, kind: &TransformKind) -> Result<Value> {
    let records = as_records(data);

    let result = match kind {
        TransformKind::Normalize { mapping } => serde_json::to_value(normalize(data, mapping))?,
        TransformKind::Percentages { value_field } => Value::Array(compute_percentages(records, value_field)),
        TransformKind::Aggregate { group_field, value_field } => {
            serde_json::to_value(aggregate_by_field(records, group_field, value_field))?
        }
        TransformKind::Filter { start, end, date_field } => {
            Value::Array(filter_by_date_range(records, start, end, date_field))
        }
        TransformKind::Sort { ascending } => Value::Array(sort_by_value(records, *ascending)),
    };

    Ok(result)
}

/// Validate transformation arguments
///
/// **Public** - can be called before execute_transform for early validation
pub fn validate_transform_args(args: &TransformArgs) -> Result<()> {
    validate_input(&args.input)?;
    validate_output(args.output.as_deref())?;

    match &args.kind {
        TransformKind::Normalize { mapping } => {
            if mapping.name_field.is_empty() || mapping.value_field.is_empty() {
                anyhow::bail!("Field names cannot be empty");
            }
        }
        TransformKind::Percentages { value_field } => {
            if value_field.is_empty() {
                anyhow::bail!("Value field cannot be empty");
            }
        }
        TransformKind::Aggregate { group_field, value_field } => {
            if group_field.trim().is_empty() {
                anyhow::bail!("Group field cannot be empty");
            }
            if value_field.is_empty() {
                anyhow::bail!("Value field cannot be empty");
            }
        }
        TransformKind::Filter { start, end, date_field } => {
            if date_field.is_empty() {
                anyhow::bail!("Date field cannot be empty");
            }
            let start_at = parse_date_str(start)
                .with_context(|| format!("Unrecognised start date: {}", start))?;
            let end_at = parse_date_str(end)
                .with_context(|| format!("Unrecognised end date: {}", end))?;
            if start_at > end_at {
                warn!("Start date {} is after end date {}, nothing will match", start, end);
            }
        }
        TransformKind::Sort { .. } => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::models::InputSource;
    use crate::parser::FieldMapping;
    use serde_json::json;
    use std::path::PathBuf;

    fn args(kind: TransformKind) -> TransformArgs {
        TransformArgs {
            kind,
            ..Default::default()
        }
    }

    #[test]
    fn test_apply_normalize() {
        let data = json!([{"region": "North", "farms": "12"}]);
        let kind = TransformKind::Normalize {
            mapping: FieldMapping::new("region", "farms"),
        };

        let result = apply_transform(&data, &kind).unwrap();

        assert_eq!(result, json!([{"name": "North", "value": 12, "region": "North", "farms": "12"}]));
    }

    #[test]
    fn test_apply_aggregate() {
        let data = json!([{"g": "a", "value": 1}, {"g": "a", "value": 2}]);
        let kind = TransformKind::Aggregate {
            group_field: "g".into(),
            value_field: "value".into(),
        };

        let result = apply_transform(&data, &kind).unwrap();

        assert_eq!(result, json!([{"name": "a", "value": 3, "count": 2}]));
    }

    #[test]
    fn test_apply_on_non_array() {
        let kind = TransformKind::Sort { ascending: true };
        assert_eq!(apply_transform(&json!({"value": 1}), &kind).unwrap(), json!([]));
    }

    #[test]
    fn test_validate_aggregate_empty_group() {
        let kind = TransformKind::Aggregate {
            group_field: " ".into(),
            value_field: "value".into(),
        };
        assert!(validate_transform_args(&args(kind)).is_err());
    }

    #[test]
    fn test_validate_filter_bad_date() {
        let kind = TransformKind::Filter {
            start: "last tuesday".into(),
            end: "2024-01-01".into(),
            date_field: "timestamp".into(),
        };
        assert!(validate_transform_args(&args(kind)).is_err());
    }

    #[test]
    fn test_validate_filter_ok() {
        let kind = TransformKind::Filter {
            start: "2024-01-01".into(),
            end: "2024-12-31T23:59:59Z".into(),
            date_field: "timestamp".into(),
        };
        assert!(validate_transform_args(&args(kind)).is_ok());
    }

    #[test]
    fn test_validate_missing_input_file() {
        let mut a = args(TransformKind::Sort { ascending: false });
        a.input = InputSource::File(PathBuf::from("/nonexistent/records.json"));
        assert!(validate_transform_args(&a).is_err());
    }
}
