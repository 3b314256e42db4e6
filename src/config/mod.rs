use crate::constants::{APP_ID_HEADER, DEFAULT_APP_ID, DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECONDS};
use crate::error::AppError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the client.
/// Supplies the base URL, the static request headers and HTTP client settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL every endpoint path is appended to, including the API version.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Application identifier sent in the `X-TBA-App-Id` header.
    #[serde(default = "default_app_id")]
    pub app_id: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_app_id() -> String {
    DEFAULT_APP_ID.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: default_base_url(),
            app_id: default_app_id(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to built-in defaults when no config file exists.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `TBA_BASE_URL` - Override base URL
    /// - `TBA_APP_ID` - Override application identifier header
    /// - `TBA_LOG_FILE` - Override log file path
    /// - `TBA_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file unreadable or invalid
    pub async fn load() -> Result<Self, AppError> {
        Self::load_with_overrides(&get_config_path()).await
    }

    /// Same as [`Config::load`] but reads the file at `path`.
    pub async fn load_with_overrides(path: &str) -> Result<Self, AppError> {
        let mut config = Self::load_stored(path).await?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Reads the configuration as saved at `path`, or defaults when no file
    /// exists. Environment overrides are not applied, so the result is safe
    /// to edit and write back.
    pub async fn load_stored(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Self::load_from_path(path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Applies `TBA_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var("TBA_BASE_URL") {
            self.base_url = base_url;
        }

        if let Ok(app_id) = std::env::var("TBA_APP_ID") {
            self.app_id = app_id;
        }

        if let Ok(log_file_path) = std::env::var("TBA_LOG_FILE") {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var("TBA_HTTP_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.base_url, &self.app_id, &self.log_file_path)
    }

    /// Base URL without a trailing slash, ready for endpoint paths.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// The fixed header set attached to every request.
    pub fn headers(&self) -> Result<HeaderMap, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(APP_ID_HEADER),
            HeaderValue::from_str(&self.app_id)?,
        );
        Ok(headers)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Marks values that come from built-in defaults
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let has_file = Path::new(&config_path).exists();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if has_file {
            println!("{config_path}");
        } else {
            println!("{config_path} (not created, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Base URL:");
        println!("{}", config.base_url);
        println!("────────────────────────────────────");
        println!("App Id:");
        println!("{}", config.app_id);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}.log", crate::constants::APP_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and strips any
    /// trailing slash from the base URL.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            base_url: self.normalized_base_url().to_string(),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        // SAFETY: env-mutating tests are marked #[serial]
        unsafe {
            std::env::remove_var("TBA_BASE_URL");
            std::env::remove_var("TBA_APP_ID");
            std::env::remove_var("TBA_LOG_FILE");
            std::env::remove_var("TBA_HTTP_TIMEOUT");
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://thebluealliance.com/api/v2");
        assert_eq!(config.app_id, DEFAULT_APP_ID);
        assert_eq!(config.log_file_path, None);
        assert_eq!(config.http_timeout_seconds, 30);
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let content = r#"
base_url = "https://tba.example.com/api/v2"
app_id = "me:tool:2"
http_timeout_seconds = 5
"#;
        tokio::fs::write(&config_path, content).await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config.base_url, "https://tba.example.com/api/v2");
        assert_eq!(config.app_id, "me:tool:2");
        assert_eq!(config.http_timeout_seconds, 5);
        assert_eq!(config.log_file_path, None);
    }

    #[tokio::test]
    async fn test_config_partial_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "app_id = \"me:tool:2\"\n")
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.app_id, "me:tool:2");
        assert_eq!(config.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "base_url = [unterminated")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original_config = Config {
            base_url: "https://tba.example.com/api/v2/".to_string(),
            app_id: "me:tool:2".to_string(),
            log_file_path: Some("/custom/log/path".to_string()),
            http_timeout_seconds: 12,
        };
        original_config
            .save_to_path(&config_path_str)
            .await
            .unwrap();
        assert!(config_path.exists());

        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded_config.base_url, "https://tba.example.com/api/v2");
        assert_eq!(loaded_config.app_id, original_config.app_id);
        assert_eq!(loaded_config.log_file_path, original_config.log_file_path);
        assert_eq!(loaded_config.http_timeout_seconds, 12);
    }

    #[test]
    fn test_config_without_log_file_path_serialization() {
        let toml_string = toml::to_string(&Config::default()).unwrap();
        assert!(!toml_string.contains("log_file_path"));
        let deserialized: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(deserialized, Config::default());
    }

    #[test]
    fn test_headers_contain_app_id() {
        let config = Config {
            app_id: "me:tool:2".to_string(),
            ..Config::default()
        };
        let headers = config.headers().unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(APP_ID_HEADER).unwrap(), "me:tool:2");
    }

    #[test]
    fn test_headers_reject_invalid_value() {
        let config = Config {
            app_id: "bad\r\nvalue".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.headers(), Err(AppError::InvalidHeader(_))));
    }

    #[test]
    fn test_normalized_base_url() {
        let config = Config {
            base_url: "http://localhost:8080//".to_string(),
            ..Config::default()
        };
        assert_eq!(config.normalized_base_url(), "http://localhost:8080");
    }

    #[tokio::test]
    #[serial]
    async fn test_load_missing_file_uses_defaults() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("absent.toml");

        let config = Config::load_with_overrides(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
        assert!(!config_path.exists());
    }

    #[tokio::test]
    #[serial]
    async fn test_env_overrides_file_values() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        Config::default()
            .save_to_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        // SAFETY: serialized with the other env tests
        unsafe {
            std::env::set_var("TBA_BASE_URL", "http://localhost:9999/api/v2");
            std::env::set_var("TBA_APP_ID", "env:app:3");
            std::env::set_var("TBA_HTTP_TIMEOUT", "7");
        }

        let config = Config::load_with_overrides(&config_path.to_string_lossy()).await;
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.base_url, "http://localhost:9999/api/v2");
        assert_eq!(config.app_id, "env:app:3");
        assert_eq!(config.http_timeout_seconds, 7);
    }

    #[tokio::test]
    #[serial]
    async fn test_env_invalid_timeout_is_ignored() {
        clear_env();
        // SAFETY: serialized with the other env tests
        unsafe {
            std::env::set_var("TBA_HTTP_TIMEOUT", "soon");
        }
        let mut config = Config::default();
        config.apply_env_overrides();
        clear_env();

        assert_eq!(config.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);
    }

    #[tokio::test]
    #[serial]
    async fn test_load_rejects_invalid_base_url() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "base_url = \"ftp://example.com\"\n")
            .await
            .unwrap();

        let result = Config::load_with_overrides(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[tokio::test]
    #[serial]
    async fn test_load_stored_ignores_env_overrides() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "app_id = \"me:tool:2\"\n")
            .await
            .unwrap();

        // SAFETY: serialized with the other env-mutating tests
        unsafe {
            std::env::set_var("TBA_BASE_URL", "http://localhost:9999/api/v2");
        }
        let stored = Config::load_stored(&config_path.to_string_lossy()).await;
        let missing = Config::load_stored(&temp_dir.path().join("none.toml").to_string_lossy()).await;
        clear_env();

        let stored = stored.unwrap();
        assert_eq!(stored.base_url, DEFAULT_BASE_URL);
        assert_eq!(stored.app_id, "me:tool:2");
        assert_eq!(missing.unwrap(), Config::default());
    }

    #[tokio::test]
    async fn test_load_stored_propagates_parse_errors() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "app_id = [").await.unwrap();

        let result = Config::load_stored(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("tba_wrapper"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("tba_wrapper"));
        assert!(log_dir_path.ends_with("logs"));
    }
}
