//! Farmwatch Charts
//!
//! Chart-data transformations for agricultural monitoring dashboards:
//! normalization, share-of-total percentages, color thresholds, group-by
//! aggregation, date-window filtering, ordering, palettes, number labels
//! and CSV export.
//!
//! This crate also provides the core implementation for the `farmwatch` CLI.
//!
//! ## Getting Started
//!
//! ```ignore
//! use farmwatch_charts::aggregator::{compute_percentages, sort_by_value};
//! use serde_json::json;
//!
//! let data = vec![json!({"name": "FMD", "value": 12}), json!({"name": "PPR", "value": 4})];
//! let ranked = sort_by_value(&compute_percentages(&data, "value"), false);
//! ```

pub mod aggregator;
pub mod api;
pub mod commands;
pub mod output;
pub mod palette;
pub mod parser;
pub mod utils;
