//! Chart-data transformations.
//!
//! This module shapes upstream records into what chart components need:
//! - Normalized `{name, value}` points
//! - Share-of-total percentages
//! - Group-by sums
//! - Date-window filtering and value ordering
//!
//! Every function here is total: bad input degrades to defaults, never errors.

pub mod filter;
pub mod grouping;
pub mod normalize;
pub mod ordering;
pub mod percentages;

// Re-export main functions
pub use filter::{filter_between, filter_by_date_range};
pub use grouping::aggregate_by_field;
pub use normalize::normalize;
pub use ordering::sort_by_value;
pub use percentages::{compute_percentages, percentage_shares};
