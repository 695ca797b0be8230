//! Optional TOML configuration for the CLI and embedding applications.
//!
//! ```toml
//! [fields]
//! name_field = "disease"
//! value_field = "cases"
//!
//! [thresholds]
//! low = 40
//! medium = 80
//!
//! [palette]
//! colors = ["#1d4ed8", "#16a34a"]
//!
//! [number]
//! decimals = 1
//! locale = "de-DE"
//!
//! [api]
//! base_url = "https://analytics.example.org/api"
//! timeout_secs = 5
//! ```
//!
//! Every section and key is optional.

use super::config::{DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT};
use super::error::ConfigError;
use crate::api::ApiConfig;
use crate::output::number::NumberFormatOptions;
use crate::palette::Thresholds;
use crate::parser::FieldMapping;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Complete chart configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Field mapping for normalization
    pub fields: FieldMapping,

    /// Color-bucket thresholds
    pub thresholds: Thresholds,

    /// Series palette
    pub palette: PaletteSettings,

    /// Number formatting defaults
    pub number: NumberFormatOptions,

    /// Analytics API connection
    pub api: ApiSettings,
}

/// Palette override
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaletteSettings {
    /// Custom colors; empty means the built-in palette
    pub colors: Vec<String>,
}

impl PaletteSettings {
    /// Custom colors if any were configured
    pub fn custom(&self) -> Option<&[String]> {
        if self.colors.is_empty() {
            None
        } else {
            Some(self.colors.as_slice())
        }
    }
}

/// API connection settings as written in the config file
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT.as_secs(),
        }
    }
}

impl ApiSettings {
    /// Turn file settings into a client config
    pub fn to_api_config(&self) -> ApiConfig {
        ApiConfig::new(self.base_url.clone()).with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

/// Load configuration from a TOML file
///
/// # Errors
/// * `ConfigError::Io` - If file cannot be read
/// * `ConfigError::Parse` - If TOML is invalid
///
/// # Example
/// ```ignore
/// let config = load_config("farmwatch.toml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ChartConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading config from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> Result<ChartConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::number::Locale;

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_config("").unwrap();
        assert_eq!(config, ChartConfig::default());
        assert_eq!(config.thresholds, Thresholds::new(30.0, 70.0));
        assert!(config.palette.custom().is_none());
    }

    #[test]
    fn test_partial_sections() {
        let config = parse_config(
            r#"
            [fields]
            value_field = "cases"

            [thresholds]
            low = 40.0

            [number]
            decimals = 2
            locale = "de-DE"
            "#,
        )
        .unwrap();

        assert_eq!(config.fields.name_field, "name");
        assert_eq!(config.fields.value_field, "cases");
        assert_eq!(config.thresholds.low, 40.0);
        assert_eq!(config.thresholds.medium, 70.0);
        assert_eq!(config.number.decimals, 2);
        assert_eq!(config.number.locale, Locale::DeDe);
    }

    #[test]
    fn test_api_settings_to_config() {
        let config = parse_config(
            r#"
            [api]
            base_url = "https://example.org/api"
            timeout_secs = 3
            "#,
        )
        .unwrap();

        let api = config.api.to_api_config();
        assert_eq!(api.base_url, "https://example.org/api");
        assert_eq!(api.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(parse_config("[thresholds\nlow = "), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(load_config("/nonexistent/farmwatch.toml"), Err(ConfigError::Io(_))));
    }
}
