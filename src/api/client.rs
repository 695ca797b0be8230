//! HTTP client for the dashboard's analytics backend.
//!
//! Everything the client needs is handed to it at construction: the address,
//! the timeout, where auth tokens come from and what to do when the backend
//! answers 401. Nothing is read from process-wide state.

use super::types::{ApiConfig, Endpoint};
use crate::utils::error::ApiError;
use log::{debug, error, info};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use serde_json::Value;

/// Supplies the current bearer token, if any
pub type TokenSupplier = Box<dyn Fn() -> Option<String> + Send + Sync>;

/// Invoked whenever the backend rejects our credentials
pub type UnauthorizedHandler = Box<dyn Fn() + Send + Sync>;

/// Blocking client for the analytics endpoints
pub struct AnalyticsClient {
    client: Client,
    config: ApiConfig,
    token_supplier: Option<TokenSupplier>,
    on_unauthorized: Option<UnauthorizedHandler>,
}

impl AnalyticsClient {
    /// Create a new client
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::RequestFailed)?;

        Ok(Self {
            client,
            config,
            token_supplier: None,
            on_unauthorized: None,
        })
    }

    /// Attach a bearer-token supplier, consulted on every request
    pub fn with_token_supplier<F>(mut self, supplier: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.token_supplier = Some(Box::new(supplier));
        self
    }

    /// Attach a handler for 401 responses (e.g. clear a stored token)
    pub fn with_unauthorized_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_unauthorized = Some(Box::new(handler));
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Full URL for an endpoint, query string included
    pub fn endpoint_url(&self, endpoint: &Endpoint) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint.path());
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;

        let query = endpoint.query();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    /// `Authorization` header value for the current token, if one is available
    pub fn authorization_header(&self) -> Option<String> {
        self.token_supplier
            .as_ref()
            .and_then(|supplier| supplier())
            .filter(|token| !token.is_empty())
            .map(|token| format!("Bearer {}", token))
    }

    /// Fetch an endpoint and return the raw JSON body
    pub fn fetch(&self, endpoint: &Endpoint) -> Result<Value, ApiError> {
        self.fetch_inner(endpoint).map_err(|err| {
            error!("Error fetching {}: {}", endpoint, err);
            err
        })
    }

    pub fn national_risk_levels(&self) -> Result<Value, ApiError> {
        self.fetch(&Endpoint::NationalRiskLevels)
    }

    pub fn disease_distribution(&self) -> Result<Value, ApiError> {
        self.fetch(&Endpoint::DiseaseDistribution)
    }

    pub fn mortality_by_disease(&self) -> Result<Value, ApiError> {
        self.fetch(&Endpoint::MortalityByDisease)
    }

    pub fn animal_health_status(&self) -> Result<Value, ApiError> {
        self.fetch(&Endpoint::AnimalHealthStatus)
    }

    pub fn vaccination_coverage(&self) -> Result<Value, ApiError> {
        self.fetch(&Endpoint::VaccinationCoverage)
    }

    pub fn regional_summary(&self, region: Option<&str>) -> Result<Value, ApiError> {
        self.fetch(&Endpoint::RegionalSummary {
            region: region.map(str::to_string),
        })
    }

    pub fn time_series(&self, period: &str) -> Result<Value, ApiError> {
        self.fetch(&Endpoint::TimeSeries {
            period: period.to_string(),
        })
    }

    fn fetch_inner(&self, endpoint: &Endpoint) -> Result<Value, ApiError> {
        let url = self.endpoint_url(endpoint)?;

        info!("Fetching {} from {}", endpoint, url);

        let mut request = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");

        if let Some(auth) = self.authorization_header() {
            debug!("Attaching bearer token");
            request = request.header(AUTHORIZATION, auth);
        }

        let response = request.send().map_err(ApiError::RequestFailed)?;
        let status = response.status();

        if let Err(err) = self.check_status(status) {
            if matches!(err, ApiError::InvalidResponse(_)) {
                return Err(ApiError::InvalidResponse(format!(
                    "HTTP {}: {}",
                    status,
                    response.text().unwrap_or_default()
                )));
            }
            return Err(err);
        }

        response.json().map_err(ApiError::RequestFailed)
    }

    /// Map a response status to success or an error, running the 401 hook
    ///
    /// **Private** - split out so status handling is testable offline
    fn check_status(&self, status: StatusCode) -> Result<(), ApiError> {
        if status == StatusCode::UNAUTHORIZED {
            if let Some(handler) = &self.on_unauthorized {
                handler();
            }
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            return Err(ApiError::InvalidResponse(format!("HTTP {}", status)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn client() -> AnalyticsClient {
        AnalyticsClient::new(ApiConfig::new("http://api.test/api/")).unwrap()
    }

    #[test]
    fn test_endpoint_url_joins_base() {
        let url = client().endpoint_url(&Endpoint::DiseaseDistribution).unwrap();
        assert_eq!(url.as_str(), "http://api.test/api/analytics/disease-distribution");
    }

    #[test]
    fn test_endpoint_url_encodes_query() {
        let url = client()
            .endpoint_url(&Endpoint::RegionalSummary { region: Some("Rift Valley".into()) })
            .unwrap();
        assert_eq!(url.as_str(), "http://api.test/api/analytics/regional-summary?region=Rift+Valley");

        let url = client()
            .endpoint_url(&Endpoint::TimeSeries { period: "7d".into() })
            .unwrap();
        assert_eq!(url.query(), Some("period=7d"));
    }

    #[test]
    fn test_invalid_base_url() {
        let client = AnalyticsClient::new(ApiConfig::new("not a url")).unwrap();
        assert!(matches!(
            client.endpoint_url(&Endpoint::NationalRiskLevels),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_authorization_header_from_supplier() {
        assert!(client().authorization_header().is_none());

        let with_token = client().with_token_supplier(|| Some("abc".to_string()));
        assert_eq!(with_token.authorization_header(), Some("Bearer abc".to_string()));

        let blank = client().with_token_supplier(|| Some(String::new()));
        assert!(blank.authorization_header().is_none());
    }

    #[test]
    fn test_unauthorized_runs_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let client = client().with_unauthorized_handler(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let result = client.check_status(StatusCode::UNAUTHORIZED);

        assert!(matches!(result, Err(ApiError::Unauthorized)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_check_status_other_codes() {
        let client = client();
        assert!(client.check_status(StatusCode::OK).is_ok());
        assert!(matches!(
            client.check_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(ApiError::InvalidResponse(_))
        ));
    }
}
