use crate::cli::{Args, is_noninteractive_mode};
use fantasy_trade_analyzer::config::Config;
use fantasy_trade_analyzer::constants::LOG_FILE_NAME;
use fantasy_trade_analyzer::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn log_filter(debug: bool) -> Result<EnvFilter, AppError> {
    let level = if debug { "debug" } else { "info" };
    let directive = format!("fantasy_trade_analyzer={level}")
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Splits a custom log path into directory and file name, falling back to
/// the default file name when the path has none.
fn split_log_path(custom_path: &str) -> (String, String) {
    let path = Path::new(custom_path);
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(LOG_FILE_NAME);
    (parent.to_string_lossy().to_string(), file_name.to_string())
}

/// Sets up logging for the application.
///
/// - The interactive shell logs only to file so log lines do not interleave
///   with the screen
/// - Non-interactive modes and `--debug` log to both stdout and file
/// - Uses a daily rolling file appender, creating the log directory if needed
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    // Only read an existing config here; prompting happens later if needed
    let config_path = Config::get_config_path();
    let config_log_path = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path)
            .await
            .ok()
            .and_then(|config| config.log_file_path)
    } else {
        None
    };

    let custom_log_path = args.log_file.as_ref().or(config_log_path.as_ref());
    let (log_dir, log_file_name) = match custom_log_path {
        Some(custom_path) => split_log_path(custom_path),
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    };

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let registry = tracing_subscriber::registry();

    if is_noninteractive_mode(args) || args.debug {
        // Non-interactive and debug: log to both stdout and file
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(log_filter(args.debug)?),
            )
            .with(
                fmt::Layer::new()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_filter(log_filter(args.debug)?),
            )
            .init();
    } else {
        // Interactive shell: log only to file
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_filter(log_filter(args.debug)?),
            )
            .init();
    }

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_log_path() {
        assert_eq!(
            split_log_path("/var/log/fta/app.log"),
            ("/var/log/fta".to_string(), "app.log".to_string())
        );
        assert_eq!(
            split_log_path("app.log"),
            (".".to_string(), "app.log".to_string())
        );
    }

    #[test]
    fn test_log_filter_builds() {
        assert!(log_filter(false).is_ok());
        assert!(log_filter(true).is_ok());
    }
}
