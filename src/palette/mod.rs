//! Color selection for charts and KPI cards.

pub mod generator;
pub mod thresholds;

pub use generator::generate_color_palette;
pub use thresholds::{color_bucket, ColorToken, Thresholds};
