//! Analytics API endpoints and client configuration.

use crate::utils::config::{DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT, DEFAULT_TIME_SERIES_PERIOD};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Connection settings, passed explicitly at construction
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base address, e.g. `http://localhost:5000/api`
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: DEFAULT_API_TIMEOUT,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// One analytics resource exposed by the dashboard backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    NationalRiskLevels,
    DiseaseDistribution,
    MortalityByDisease,
    AnimalHealthStatus,
    VaccinationCoverage,
    RegionalSummary { region: Option<String> },
    TimeSeries { period: String },
}

impl Endpoint {
    /// Path relative to the base address
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::NationalRiskLevels => "/analytics/national-risk-levels",
            Endpoint::DiseaseDistribution => "/analytics/disease-distribution",
            Endpoint::MortalityByDisease => "/analytics/mortality-by-disease",
            Endpoint::AnimalHealthStatus => "/analytics/animal-health-status",
            Endpoint::VaccinationCoverage => "/analytics/vaccination-coverage",
            Endpoint::RegionalSummary { .. } => "/analytics/regional-summary",
            Endpoint::TimeSeries { .. } => "/analytics/time-series",
        }
    }

    /// Query parameters for this request
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::RegionalSummary { region: Some(region) } => vec![("region", region.clone())],
            Endpoint::TimeSeries { period } => vec![("period", period.clone())],
            _ => Vec::new(),
        }
    }

    /// Human-readable name used in logs
    pub fn label(&self) -> &'static str {
        match self {
            Endpoint::NationalRiskLevels => "national risk levels",
            Endpoint::DiseaseDistribution => "disease distribution",
            Endpoint::MortalityByDisease => "mortality by disease",
            Endpoint::AnimalHealthStatus => "animal health status",
            Endpoint::VaccinationCoverage => "vaccination coverage",
            Endpoint::RegionalSummary { .. } => "regional summary",
            Endpoint::TimeSeries { .. } => "time series data",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Endpoint selector as typed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    NationalRiskLevels,
    DiseaseDistribution,
    MortalityByDisease,
    AnimalHealthStatus,
    VaccinationCoverage,
    RegionalSummary,
    TimeSeries,
}

impl EndpointKind {
    pub const NAMES: &'static [&'static str] = &[
        "national-risk-levels",
        "disease-distribution",
        "mortality-by-disease",
        "animal-health-status",
        "vaccination-coverage",
        "regional-summary",
        "time-series",
    ];

    /// Build the concrete endpoint, filling in optional parameters
    pub fn into_endpoint(self, region: Option<String>, period: Option<String>) -> Endpoint {
        match self {
            EndpointKind::NationalRiskLevels => Endpoint::NationalRiskLevels,
            EndpointKind::DiseaseDistribution => Endpoint::DiseaseDistribution,
            EndpointKind::MortalityByDisease => Endpoint::MortalityByDisease,
            EndpointKind::AnimalHealthStatus => Endpoint::AnimalHealthStatus,
            EndpointKind::VaccinationCoverage => Endpoint::VaccinationCoverage,
            EndpointKind::RegionalSummary => Endpoint::RegionalSummary { region },
            EndpointKind::TimeSeries => Endpoint::TimeSeries {
                period: period.unwrap_or_else(|| DEFAULT_TIME_SERIES_PERIOD.to_string()),
            },
        }
    }
}

impl FromStr for EndpointKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "national-risk-levels" => Ok(EndpointKind::NationalRiskLevels),
            "disease-distribution" => Ok(EndpointKind::DiseaseDistribution),
            "mortality-by-disease" => Ok(EndpointKind::MortalityByDisease),
            "animal-health-status" => Ok(EndpointKind::AnimalHealthStatus),
            "vaccination-coverage" => Ok(EndpointKind::VaccinationCoverage),
            "regional-summary" => Ok(EndpointKind::RegionalSummary),
            "time-series" => Ok(EndpointKind::TimeSeries),
            other => Err(format!(
                "unknown endpoint '{}' (expected one of: {})",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}
