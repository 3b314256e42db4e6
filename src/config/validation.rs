use crate::error::AppError;
use reqwest::header::HeaderValue;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Base URL cannot be empty and must start with `http://` or `https://`
/// - App id cannot be empty and must be usable as a header value
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    base_url: &str,
    app_id: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if base_url.is_empty() {
        return Err(AppError::config_error("Base URL cannot be empty"));
    }

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "Base URL must start with http:// or https://, got '{base_url}'"
        )));
    }

    if app_id.trim().is_empty() {
        return Err(AppError::config_error("App id cannot be empty"));
    }

    if HeaderValue::from_str(app_id).is_err() {
        return Err(AppError::config_error(
            "App id contains characters that are not allowed in a header",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
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
