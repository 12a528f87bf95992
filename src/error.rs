use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum MediaBinError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse project file '{path}': {source}")]
    ProjectParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize project: {0}")]
    ProjectSerialize(#[source] serde_json::Error),

    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("No project file given (use --project or set project.default_path)")]
    NoProject,

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid project key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl MediaBinError {
    pub(crate) fn invalid_key(key: &str, reason: impl Into<String>) -> Self {
        MediaBinError::InvalidKey {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MediaBinError>;
