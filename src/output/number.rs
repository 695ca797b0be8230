//! Locale-aware number formatting for chart labels and KPI cards.

use crate::parser::record::format_js_number;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Number display conventions for the locales the dashboard ships with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    DeDe,
    FrFr,
}

impl Locale {
    /// Resolve a BCP 47 tag, falling back to `en-US` for anything unsupported
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en-us" | "en" => Locale::EnUs,
            "en-gb" => Locale::EnGb,
            "de-de" | "de" => Locale::DeDe,
            "fr-fr" | "fr" => Locale::FrFr,
            other => {
                warn!("Unsupported locale '{}', formatting as en-US", other);
                Locale::EnUs
            }
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
        }
    }

    fn group_separator(&self) -> &'static str {
        match self {
            Locale::EnUs | Locale::EnGb => ",",
            Locale::DeDe => ".",
            Locale::FrFr => "\u{202f}",
        }
    }

    fn decimal_separator(&self) -> &'static str {
        match self {
            Locale::EnUs | Locale::EnGb => ".",
            Locale::DeDe | Locale::FrFr => ",",
        }
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Locale::from_tag(&tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag().to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Options for [`format_number`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormatOptions {
    /// Exact number of fraction digits
    pub decimals: usize,

    /// Text placed before the number (e.g. a currency sign)
    pub prefix: String,

    /// Text placed after the number (e.g. `"%"` or `" head"`)
    pub suffix: String,

    pub locale: Locale,
}

impl NumberFormatOptions {
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// Fixed-point rendering with halves rounded away from zero
///
/// **Public** - also used for one-decimal percentage strings
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format_js_number(value);
    }

    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    // Beyond 2^53 every float is already an integer at this scale
    let rounded = if scaled.abs() < 9.0e15 {
        scaled.round() / factor
    } else {
        value
    };

    format!("{:.*}", decimals, rounded)
}

/// Format a float with grouping, fixed decimals, prefix and suffix
pub fn format_f64(value: f64, options: &NumberFormatOptions) -> String {
    let body = if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "∞" } else { "-∞" }.to_string()
    } else {
        localize(value, options)
    };

    format!("{}{}{}", options.prefix, body, options.suffix)
}

/// Format a JSON value for display
///
/// **Public** - numbers are formatted; anything else (including strings that
/// were formatted upstream) is passed through unchanged
pub fn format_number(value: &Value, options: &NumberFormatOptions) -> Value {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map(|number| Value::String(format_f64(number, options)))
            .unwrap_or_else(|| value.clone()),
        _ => value.clone(),
    }
}

fn localize(value: f64, options: &NumberFormatOptions) -> String {
    let fixed = to_fixed(value.abs(), options.decimals);
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + 4);
    if value < 0.0 {
        out.push('-');
    }
    out.push_str(&group_digits(integer, options.locale.group_separator()));
    if let Some(fraction) = fraction {
        out.push_str(options.locale.decimal_separator());
        out.push_str(fraction);
    }
    out
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}
