use std::io;

use thiserror::Error;

/// Library-wide error type for ocp-install operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A key required to build the task is absent from the merged configuration.
    #[error("Missing required configuration key '{key}'")]
    MissingConfigKey { key: String },

    /// A configuration value cannot be rendered where it is used.
    #[error("Invalid value for '{key}': {reason}")]
    InvalidConfigValue { key: String, reason: String },

    /// Named secret bundle does not exist in the secret store.
    #[error("Secret bundle '{0}' not found")]
    SecretBundleMissing(String),

    /// Secret bundle exists but is not a JSON object.
    #[error("Secret bundle '{name}' is invalid: {details}")]
    InvalidSecretBundle { name: String, details: String },

    /// Variable file for the requested target does not exist.
    #[error("Task variables not found: {0}")]
    VariablesNotFound(String),

    /// Version string is not `major.minor`.
    #[error("Invalid version '{0}': expected major.minor (e.g. 4.10)")]
    InvalidVersion(String),

    /// Platform, profile or release stream is unusable.
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidTarget { field: &'static str, value: String, reason: String },

    /// Command-line argument does not name a known value or does not apply.
    #[error("Invalid {field} '{value}': {reason}")]
    InvalidArgument { field: &'static str, value: String, reason: String },

    /// JSON document was read but does not have the expected shape.
    #[error("Invalid document {path}: {reason}")]
    InvalidDocument { path: String, reason: String },

    /// Application configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Explicitly requested configuration file does not exist.
    #[error("Configuration file not found: {0}")]
    ConfigFileMissing(String),

    /// Git lookup failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// URL could not be parsed or rewritten.
    #[error("Invalid URL '{url}': {details}")]
    InvalidUrl { url: String, details: String },
}

impl AppError {
    pub fn missing_key<S: Into<String>>(key: S) -> Self {
        AppError::MissingConfigKey { key: key.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::MissingConfigKey { .. }
            | AppError::InvalidConfigValue { .. }
            | AppError::InvalidSecretBundle { .. }
            | AppError::InvalidVersion(_)
            | AppError::InvalidTarget { .. }
            | AppError::InvalidArgument { .. }
            | AppError::InvalidDocument { .. }
            | AppError::InvalidConfig(_)
            | AppError::Json(_)
            | AppError::TomlParseError(_)
            | AppError::InvalidUrl { .. } => io::ErrorKind::InvalidInput,
            AppError::SecretBundleMissing(_)
            | AppError::VariablesNotFound(_)
            | AppError::ConfigFileMissing(_) => io::ErrorKind::NotFound,
            AppError::GitError { .. } => io::ErrorKind::Other,
        }
    }
}
