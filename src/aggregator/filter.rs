//! Date-window filtering for time-series charts.

use crate::parser::dates::{parse_date_str, parse_instant};
use crate::parser::record::field;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde_json::Value;

/// Keep records whose date field falls inside `[start, end]`
///
/// **Public** - string-bounded entry point used by the CLI
///
/// # Arguments
/// * `data` - Input records
/// * `start` / `end` - Inclusive bounds in any form [`parse_date_str`] accepts
/// * `date_field` - Field holding each record's date (usually `"timestamp"`)
///
/// # Returns
/// Matching records in input order. Unparseable record dates never match,
/// and unparseable bounds match nothing.
pub fn filter_by_date_range(data: &[Value], start: &str, end: &str, date_field: &str) -> Vec<Value> {
    match (parse_date_str(start), parse_date_str(end)) {
        (Some(start), Some(end)) => filter_between(data, start, end, date_field),
        _ => {
            warn!("Unparseable date range [{}, {}], no records match", start, end);
            Vec::new()
        }
    }
}

/// Keep records whose date field falls inside `[start, end]`
///
/// **Public** - typed variant for callers that already hold instants
pub fn filter_between(
    data: &[Value],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    date_field: &str,
) -> Vec<Value> {
    let kept: Vec<Value> = data
        .iter()
        .filter(|record| {
            parse_instant(field(record, date_field))
                .map(|at| at >= start && at <= end)
                .unwrap_or(false)
        })
        .cloned()
        .collect();

    debug!(
        "Date filter [{} .. {}] kept {}/{} records",
        start.to_rfc3339(),
        end.to_rfc3339(),
        kept.len(),
        data.len()
    );

    kept
}
