//! Group-by and sum for bar and treemap charts.

use crate::parser::record::{coerce_label, field, number_field};
use crate::parser::schema::AggregationBucket;
use log::debug;
use serde_json::Value;
use std::collections::HashMap;

/// Group records by a field and sum another field per group
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `data` - Input records
/// * `group_field` - Field whose string value is the grouping key
/// * `value_field` - Numeric field to sum (usually `"value"`)
///
/// # Returns
/// One bucket per distinct key, in the order each key was first seen.
/// Records without the grouping field share the empty key `""`.
pub fn aggregate_by_field(data: &[Value], group_field: &str, value_field: &str) -> Vec<AggregationBucket> {
    // key -> position in `buckets`, so output keeps first-seen order
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<AggregationBucket> = Vec::new();

    for record in data {
        let key = coerce_label(field(record, group_field)).unwrap_or_default();
        let value = number_field(record, value_field);

        let slot = *index.entry(key).or_insert_with_key(|key| {
            buckets.push(AggregationBucket::new(key.clone()));
            buckets.len() - 1
        });
        buckets[slot].add(value);
    }

    debug!(
        "Aggregated {} records by '{}' into {} buckets",
        data.len(),
        group_field,
        buckets.len()
    );

    buckets
}
