//! Application-wide constants and configuration values
//!
//! This module centralizes the magic strings and numbers shared between the
//! data collector, the session core and the terminal front end.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Default fantasy game code to collect leagues for
pub const DEFAULT_GAME_CODE: &str = "nhl";

/// Name of the log file written inside the log directory
pub const LOG_FILE_NAME: &str = "fantasy_trade_analyzer.log";

/// Directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "fantasy_trade_analyzer";

/// Title shown in the terminal window and on the main screen
pub const APP_TITLE: &str = "Fantasy Trade Analyzer";

/// Scoring type reported by the fantasy API for head-to-head category leagues.
/// Only these leagues carry stat categories.
pub const CATEGORY_SCORING_TYPE: &str = "head";

/// Retry policy for the HTTP collector
pub mod retry {
    /// Maximum number of retries for transient failures
    pub const MAX_RETRIES: u32 = 3;

    /// Initial backoff before the first retry, doubled on each attempt
    pub const INITIAL_BACKOFF_MS: u64 = 250;

    /// Delay suggested after a rate limit response
    pub const RATE_LIMIT_DELAY_SECONDS: u64 = 60;

    /// Delay suggested after a 5xx response
    pub const SERVER_ERROR_DELAY_SECONDS: u64 = 5;

    /// Delay suggested after a network timeout
    pub const NETWORK_TIMEOUT_DELAY_SECONDS: u64 = 2;

    /// Delay suggested after a connection failure
    pub const NETWORK_CONNECTION_DELAY_SECONDS: u64 = 10;
}

/// Environment variable names that override config file values
pub mod env_vars {
    pub const API_DOMAIN: &str = "FANTASY_API_DOMAIN";
    pub const API_TOKEN: &str = "FANTASY_API_TOKEN";
    pub const LOG_FILE: &str = "FANTASY_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "FANTASY_HTTP_TIMEOUT";
    pub const SEASON: &str = "FANTASY_SEASON";
}
