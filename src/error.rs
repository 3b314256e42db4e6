use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Anything the HTTP client reports is forwarded as-is.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Missing option '{key}' for endpoint {endpoint}")]
    MissingOption { endpoint: String, key: String },

    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("Invalid option '{0}', expected key=value")]
    InvalidOption(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a missing option error for a template key that has no value
    pub fn missing_option(endpoint: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingOption {
            endpoint: endpoint.into(),
            key: key.into(),
        }
    }

    /// Create an unknown endpoint error
    pub fn unknown_endpoint(name: impl Into<String>) -> Self {
        Self::UnknownEndpoint(name.into())
    }

    /// Create an invalid option error for a malformed `key=value` pair
    pub fn invalid_option(raw: impl Into<String>) -> Self {
        Self::InvalidOption(raw.into())
    }

    /// Check if the error came from the HTTP client rather than from this crate
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport(_))
    }
}
