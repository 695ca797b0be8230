//! Share-of-total computation for pie and donut charts.

use crate::output::number::to_fixed;
use crate::parser::record::number_field;
use crate::utils::config::PERCENTAGE_FIELD;
use log::debug;
use serde_json::{Map, Value};

/// Format each value's share of the collection total as a one-decimal string
///
/// Values are scaled by the largest magnitude before summing so huge inputs
/// can't overflow the total. A non-positive total yields `"0"` for every value.
pub fn percentage_shares(values: &[f64]) -> Vec<String> {
    let scale = values.iter().fold(0.0_f64, |max, v| max.max(v.abs()));
    if scale == 0.0 || !scale.is_finite() {
        return vec!["0".to_string(); values.len()];
    }

    let total: f64 = values.iter().map(|v| v / scale).sum();
    values
        .iter()
        .map(|v| {
            if total > 0.0 {
                to_fixed(v / scale / total * 100.0, 1)
            } else {
                "0".to_string()
            }
        })
        .collect()
}

/// Attach a `percentage` field to every record
///
/// **Public** - main entry point for share-of-total charts
///
/// # Arguments
/// * `data` - Input records
/// * `value_field` - Numeric field to total (usually `"value"`)
///
/// # Returns
/// Copies of the input records, each with a `percentage` string carrying one
/// decimal digit. Records that are not objects come back as
/// `{"percentage": ...}`.
pub fn compute_percentages(data: &[Value], value_field: &str) -> Vec<Value> {
    let values: Vec<f64> = data.iter().map(|record| number_field(record, value_field)).collect();
    debug!("Computing percentages over {} records", data.len());

    data.iter()
        .zip(percentage_shares(&values))
        .map(|(record, share)| {
            let mut annotated = record.as_object().cloned().unwrap_or_else(Map::new);
            annotated.insert(PERCENTAGE_FIELD.to_string(), Value::String(share));
            Value::Object(annotated)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn percentages(result: &[Value]) -> Vec<&str> {
        result
            .iter()
            .map(|r| r[PERCENTAGE_FIELD].as_str().unwrap())
            .collect()
    }

    #[test]
    fn test_compute_percentages_basic() {
        let data = vec![
            json!({"name": "Healthy", "value": 50, "color": "green"}),
            json!({"name": "Sick", "value": 30}),
            json!({"name": "Dead", "value": 20}),
        ];

        let result = compute_percentages(&data, "value");

        assert_eq!(percentages(&result), vec!["50.0", "30.0", "20.0"]);
        assert_eq!(result[0]["color"], json!("green"));
        assert_eq!(result[0]["name"], json!("Healthy"));
    }

    #[test]
    fn test_compute_percentages_all_zero() {
        let data = vec![json!({"value": 0}), json!({"value": 0}), json!({"value": "x"})];

        let result = compute_percentages(&data, "value");

        assert_eq!(percentages(&result), vec!["0", "0", "0"]);
    }

    #[test]
    fn test_compute_percentages_custom_field() {
        let data = vec![json!({"cases": 1}), json!({"cases": 3})];

        let result = compute_percentages(&data, "cases");

        assert_eq!(percentages(&result), vec!["25.0", "75.0"]);
    }

    #[test]
    fn test_compute_percentages_non_object() {
        let result = compute_percentages(&[json!(5)], "value");
        assert_eq!(result[0], json!({"percentage": "0"}));
    }

    #[test]
    fn test_percentage_shares() {
        assert_eq!(percentage_shares(&[1.0, 2.0]), vec!["33.3", "66.7"]);
        assert_eq!(percentage_shares(&[5.0, 0.0]), vec!["100.0", "0.0"]);
        assert_eq!(percentage_shares(&[0.0, 0.0]), vec!["0", "0"]);
        assert_eq!(percentage_shares(&[-5.0, 2.0]), vec!["0", "0"]);
        assert!(percentage_shares(&[]).is_empty());
    }

    #[test]
    fn test_percentages_huge_values_do_not_overflow() {
        let data = vec![json!({"value": 1e308}), json!({"value": 1e308})];

        let result = compute_percentages(&data, "value");

        assert_eq!(percentages(&result), vec!["50.0", "50.0"]);
    }
}
