//! Shape arbitrary upstream records into labeled chart values.

use crate::parser::record::{as_records, coerce_label, coerce_number, field, FieldMapping};
use crate::parser::schema::LabeledValue;
use crate::utils::config::{DEFAULT_NAME_FIELD, DEFAULT_VALUE_FIELD};
use log::debug;
use serde_json::Value;

/// Normalize records into `{name, value, ..extra}` form
///
/// **Public** - first step for most chart pipelines
///
/// # Arguments
/// * `data` - Raw input; anything but an array yields an empty result
/// * `mapping` - Which fields hold the label and the value
///
/// # Returns
/// One labeled value per input record, in input order. Missing labels become
/// empty strings and non-numeric values become 0.
pub fn normalize(data: &Value, mapping: &FieldMapping) -> Vec<LabeledValue> {
    let records = as_records(data);
    debug!(
        "Normalizing {} records (name: {}, value: {})",
        records.len(),
        mapping.name_field,
        mapping.value_field
    );

    records.iter().map(|record| normalize_record(record, mapping)).collect()
}

/// Normalize a single record
///
/// **Private** - per-record extraction
fn normalize_record(record: &Value, mapping: &FieldMapping) -> LabeledValue {
    let name = coerce_label(
        field(record, &mapping.name_field).or_else(|| field(record, DEFAULT_NAME_FIELD)),
    )
    .unwrap_or_default();

    let value = coerce_number(
        field(record, &mapping.value_field).or_else(|| field(record, DEFAULT_VALUE_FIELD)),
    );

    let mut extra = record.as_object().cloned().unwrap_or_default();
    extra.remove(DEFAULT_NAME_FIELD);
    extra.remove(DEFAULT_VALUE_FIELD);

    LabeledValue { name, value, extra }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_custom_fields() {
        let data = json!([
            {"disease": "FMD", "cases": 120, "region": "North"},
            {"disease": "Anthrax", "cases": "45"}
        ]);
        let mapping = FieldMapping::new("disease", "cases");

        let result = normalize(&data, &mapping);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "FMD");
        assert_eq!(result[0].value, 120.0);
        assert_eq!(result[0].extra.get("region"), Some(&json!("North")));
        assert_eq!(result[0].extra.get("disease"), Some(&json!("FMD")));
        assert_eq!(result[1].value, 45.0);
    }

    #[test]
    fn test_normalize_falls_back_to_literal_fields() {
        let data = json!([{"name": "Goats", "value": 9}]);
        let mapping = FieldMapping::new("label", "count");

        let result = normalize(&data, &mapping);

        assert_eq!(result[0].name, "Goats");
        assert_eq!(result[0].value, 9.0);
    }

    #[test]
    fn test_normalize_mapped_fields_win_over_literal_ones() {
        let data = json!([{"name": "old", "label": "new", "value": 5, "n": 12}]);
        let mapping = FieldMapping::new("label", "n");

        let result = normalize(&data, &mapping);

        assert_eq!(result[0].name, "new");
        assert_eq!(result[0].value, 12.0);
        assert_eq!(result[0].extra.get("label"), Some(&json!("new")));
        assert_eq!(result[0].extra.get("n"), Some(&json!(12)));

        let record: Value = result[0].clone().into();
        assert_eq!(record, json!({"name": "new", "value": 12, "label": "new", "n": 12}));
    }

    #[test]
    fn test_normalize_keeps_length_with_junk() {
        let data = json!([{"value": "n/a"}, 17, null, {"name": "x"}]);

        let result = normalize(&data, &FieldMapping::default());

        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|lv| lv.value == 0.0));
        assert_eq!(result[0].name, "");
        assert_eq!(result[3].name, "x");
    }

    #[test]
    fn test_normalize_non_sequence() {
        assert!(normalize(&json!({"name": "a", "value": 1}), &FieldMapping::default()).is_empty());
        assert!(normalize(&json!("oops"), &FieldMapping::default()).is_empty());
    }
}
