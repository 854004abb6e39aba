use crate::constants::{DEFAULT_GAME_CODE, DEFAULT_HTTP_TIMEOUT_SECONDS, LOG_FILE_NAME, env_vars};
use crate::error::AppError;
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_api_domain;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the fantasy API gateway used by the league collector.
    pub api_domain: String,
    /// Bearer token sent with every API request, if the gateway requires one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Fantasy game code whose leagues are collected (e.g. "nhl").
    #[serde(default = "default_game_code")]
    pub game_code: String,
    /// Season year to collect. Defaults to the current year when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<i32>,
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_game_code() -> String {
    DEFAULT_GAME_CODE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: String::new(),
            api_token: None,
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            game_code: default_game_code(),
            season: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, prompts user for API domain and creates one.
    ///
    /// # Environment Variables
    /// - `FANTASY_API_DOMAIN` - Override API domain
    /// - `FANTASY_API_TOKEN` - Override API token
    /// - `FANTASY_LOG_FILE` - Override log file path
    /// - `FANTASY_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `FANTASY_SEASON` - Override season year
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            Config {
                api_domain,
                ..Config::default()
            }
        } else {
            let config = Config {
                api_domain: prompt_for_api_domain().await?,
                ..Config::default()
            };
            config.save().await?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of file values.
    /// Unparseable numeric values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }

        if let Ok(token) = std::env::var(env_vars::API_TOKEN) {
            self.api_token = Some(token);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Some(season) = std::env::var(env_vars::SEASON)
            .ok()
            .and_then(|s| s.parse::<i32>().ok())
        {
            self.season = Some(season);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_domain,
            &self.game_code,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Season to collect: the configured one, or the current calendar year.
    pub fn effective_season(&self) -> i32 {
        self.season.unwrap_or_else(|| Local::now().year())
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Domain:");
            println!("{}", config.api_domain);
            println!("API Token:");
            println!(
                "{}",
                if config.api_token.is_some() {
                    "(set)"
                } else {
                    "(not set)"
                }
            );
            println!("────────────────────────────────────");
            println!("Game / Season:");
            println!("{} {}", config.game_code, config.effective_season());
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{LOG_FILE_NAME}");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if needed. A domain without a scheme is
    /// stored with an `https://` prefix.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let api_domain = if self.api_domain.starts_with("https://")
            || self.api_domain.starts_with("http://")
        {
            self.api_domain.clone()
        } else {
            format!("https://{}", self.api_domain)
        };

        let content = toml::to_string_pretty(&Config {
            api_domain,
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
