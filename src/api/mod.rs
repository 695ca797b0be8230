//! Client for the analytics HTTP API.

pub mod client;
pub mod types;

pub use client::{AnalyticsClient, TokenSupplier, UnauthorizedHandler};
pub use types::{ApiConfig, Endpoint, EndpointKind};
