//! Fetch command: pull one analytics resource from the API.

use super::models::FetchArgs;
use super::utils::{emit_output, validate_output};
use crate::api::AnalyticsClient;
use anyhow::{Context, Result};
use log::{info, warn};

/// Execute the fetch command
///
/// **Public** - main entry point called from main.rs
pub fn execute_fetch(args: FetchArgs) -> Result<()> {
    let endpoint = args.endpoint.into_endpoint(args.region.clone(), args.period.clone());

    let mut client = AnalyticsClient::new(args.api.clone()).context("Failed to create API client")?;

    if let Some(token) = args.token.clone() {
        client = client.with_token_supplier(move || Some(token.clone()));
    }

    client = client.with_unauthorized_handler(|| {
        warn!("API rejected the credentials; supply a fresh token with --token");
    });

    let body = client
        .fetch(&endpoint)
        .with_context(|| format!("Failed to fetch {}", endpoint))?;

    info!("✓ Received {}", endpoint);

    emit_output(&body, args.output.as_deref())
}

/// Validate fetch arguments
pub fn validate_fetch_args(args: &FetchArgs) -> Result<()> {
    let base = &args.api.base_url;

    if base.is_empty() {
        anyhow::bail!("API URL cannot be empty");
    }

    if !base.starts_with("http://") && !base.starts_with("https://") {
        anyhow::bail!("API URL must start with http:// or https://");
    }

    if args.api.timeout.is_zero() {
        anyhow::bail!("Timeout must be greater than 0");
    }

    if let Some(period) = &args.period {
        if period.trim().is_empty() {
            anyhow::bail!("Period cannot be empty");
        }
    }

    validate_output(args.output.as_deref())
}
