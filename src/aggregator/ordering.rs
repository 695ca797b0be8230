//! Value ordering for ranked bar charts.

use crate::parser::schema::Valued;

/// Stable sort by numeric value
///
/// **Public** - works on raw records, labeled values and buckets alike
///
/// # Arguments
/// * `data` - Items to sort; left untouched
/// * `ascending` - `false` puts the largest value first
///
/// # Returns
/// A sorted copy. Ties keep their input order. Values compare by
/// `f64::total_cmp`, so a NaN still lands in one consistent place.
pub fn sort_by_value<T: Valued + Clone>(data: &[T], ascending: bool) -> Vec<T> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| {
        let (a, b) = (a.numeric_value(), b.numeric_value());
        if ascending {
            a.total_cmp(&b)
        } else {
            b.total_cmp(&a)
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::AggregationBucket;
    use serde_json::{json, Value};

    #[test]
    fn test_sort_descending_default() {
        let data = vec![json!({"value": 2}), json!({"value": 9}), json!({"value": "5"})];

        let sorted = sort_by_value(&data, false);

        assert_eq!(sorted, vec![json!({"value": 9}), json!({"value": "5"}), json!({"value": 2})]);
        // Input untouched
        assert_eq!(data[0], json!({"value": 2}));
    }

    #[test]
    fn test_sort_is_stable_with_missing_values() {
        let data = vec![
            json!({"id": 1}),
            json!({"id": 2, "value": -1}),
            json!({"id": 3, "value": "junk"}),
        ];

        let sorted: Vec<Value> = sort_by_value(&data, true);

        let ids: Vec<i64> = sorted.iter().map(|r| r["id"].as_i64().unwrap()).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    fn names(buckets: &[AggregationBucket]) -> Vec<&str> {
        buckets.iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn test_sort_buckets_descending() {
        let buckets = vec![
            AggregationBucket { name: "a".into(), value: 1.0, count: 1 },
            AggregationBucket { name: "b".into(), value: 3.0, count: 1 },
            AggregationBucket { name: "c".into(), value: 2.0, count: 1 },
        ];

        let sorted = sort_by_value(&buckets, false);

        assert_eq!(names(&sorted), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_with_nan_is_consistent() {
        let buckets = vec![
            AggregationBucket { name: "three".into(), value: 3.0, count: 1 },
            AggregationBucket { name: "nan".into(), value: f64::NAN, count: 1 },
            AggregationBucket { name: "one".into(), value: 1.0, count: 1 },
            AggregationBucket { name: "two".into(), value: 2.0, count: 1 },
        ];

        let ascending = sort_by_value(&buckets, true);
        assert_eq!(names(&ascending), vec!["one", "two", "three", "nan"]);
        assert_eq!(names(&sort_by_value(&ascending, true)), names(&ascending));

        let descending = sort_by_value(&buckets, false);
        assert_eq!(names(&descending), vec!["nan", "three", "two", "one"]);
        assert_eq!(names(&sort_by_value(&descending, false)), names(&descending));
    }
}
