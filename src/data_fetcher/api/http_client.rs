//! HTTP client creation and configuration utilities

use crate::error::AppError;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use std::time::Duration;

/// Creates an HTTP client with request timeout, connection pooling and,
/// when a token is configured, a bearer `Authorization` header on every request.
pub fn create_http_client(
    timeout_seconds: u64,
    api_token: Option<&str>,
) -> Result<Client, AppError> {
    let mut headers = HeaderMap::new();
    if let Some(token) = api_token {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| AppError::config_error("API token contains invalid characters"))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Creates an HTTP client for testing with default timeout and no token
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS, None)
        .expect("Failed to create test HTTP client")
}
