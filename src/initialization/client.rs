//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{INSIGHT_REQUEST_TIMEOUT_SECS, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used to reach the insight service.
///
/// Creates a `reqwest::Client` configured with:
/// - A crate-specific User-Agent
/// - An overall request timeout, so a stalled collaborator cannot hold a check
/// - A short TCP connect timeout
/// - The rustls TLS backend
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_insight_client() -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(INSIGHT_REQUEST_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;
    Ok(client)
}
