//! Series color assignment.

use crate::utils::config::DEFAULT_PALETTE;
use log::warn;

/// Produce `count` colors by cycling through a palette
///
/// **Public** - deterministic for a given count and palette
///
/// # Arguments
/// * `count` - Number of series needing a color
/// * `base_colors` - Custom palette; `None` or an empty slice uses the default
///
/// # Returns
/// Exactly `count` colors, wrapping around the palette as needed
pub fn generate_color_palette(count: usize, base_colors: Option<&[String]>) -> Vec<String> {
    match base_colors {
        Some(colors) if !colors.is_empty() => cycle(colors, count),
        Some(_) => {
            warn!("Empty custom palette, using the default colors");
            cycle(&DEFAULT_PALETTE, count)
        }
        None => cycle(&DEFAULT_PALETTE, count),
    }
}

fn cycle<S: AsRef<str>>(colors: &[S], count: usize) -> Vec<String> {
    (0..count)
        .map(|i| colors[i % colors.len()].as_ref().to_string())
        .collect()
}
