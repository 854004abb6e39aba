use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain cannot be empty
/// - API domain must be a valid URL or domain name
/// - Game code cannot be empty
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    api_domain: &str,
    game_code: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        // Without a protocol it should at least look like a domain
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(
                "API domain must be a valid URL or domain name",
            ));
        }
    }

    if game_code.trim().is_empty() {
        return Err(AppError::config_error("Game code cannot be empty"));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_accepts_plain_domain() {
        assert!(validate_config("api.example.com", "nhl", 30, &None).is_ok());
        assert!(validate_config("localhost:8080", "nhl", 30, &None).is_ok());
        assert!(validate_config("https://fantasy.example.com", "nhl", 30, &None).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_and_bare_domains() {
        assert!(matches!(
            validate_config("", "nhl", 30, &None),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            validate_config("notadomain", "nhl", 30, &None),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_game_code_and_zero_timeout() {
        assert!(validate_config("api.example.com", "  ", 30, &None).is_err());
        assert!(validate_config("api.example.com", "nhl", 0, &None).is_err());
    }

    #[test]
    fn test_validate_log_path() {
        assert!(validate_config("api.example.com", "nhl", 30, &Some(String::new())).is_err());

        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("logs").join("app.log");
        let nested = Some(nested.to_string_lossy().to_string());
        assert!(validate_config("api.example.com", "nhl", 30, &nested).is_ok());
        assert!(temp_dir.path().join("logs").exists());
    }
}
