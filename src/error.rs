//! Error type shared by the collector, the snapshot store and the shell.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Request to the fantasy API failed: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Could not decode JSON: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Gateway status codes
    #[error("Nothing at {url} (404)")]
    ApiNotFound { url: String },

    #[error("Fantasy API unavailable ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Fantasy API refused the request ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Fantasy API is throttling requests (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("Timed out waiting for {url}")]
    NetworkTimeout { url: String },

    #[error("Could not reach {url}: {message}")]
    NetworkConnection { url: String, message: String },

    // League data that does not match the expected shape
    #[error("Response from {url} is not valid JSON: {message}")]
    ApiMalformedJson { message: String, url: String },

    #[error("Response from {url} has an unexpected shape: {message}")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("Response from {url} carried no league data: {message}")]
    ApiNoData { message: String, url: String },

    #[error("No leagues found for {game_code} season {season}")]
    NoLeaguesFound { game_code: String, season: i32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not write config file: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Could not read config file: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// A snapshot file that is missing, unreadable or holds no leagues.
    pub fn snapshot_error(msg: impl Into<String>) -> Self {
        Self::Snapshot(msg.into())
    }

    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Gateway answered with a 5xx.
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Gateway answered with a 4xx other than 404 and 429, e.g. a bad token.
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn no_leagues_found(game_code: impl Into<String>, season: i32) -> Self {
        Self::NoLeaguesFound {
            game_code: game_code.into(),
            season,
        }
    }

    /// Whether skipping a league on this error is worth a later retry of
    /// the whole collection.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiServerError { .. }
                | AppError::ApiRateLimit { .. }
        )
    }

    /// Seconds to wait before collecting again, for retryable errors.
    pub fn retry_delay_seconds(&self) -> Option<u64> {
        use crate::constants::retry;

        match self {
            AppError::ApiRateLimit { .. } => Some(retry::RATE_LIMIT_DELAY_SECONDS),
            AppError::ApiServerError { .. } => Some(retry::SERVER_ERROR_DELAY_SECONDS),
            AppError::NetworkTimeout { .. } => Some(retry::NETWORK_TIMEOUT_DELAY_SECONDS),
            AppError::NetworkConnection { .. } => Some(retry::NETWORK_CONNECTION_DELAY_SECONDS),
            _ => None,
        }
    }
}
