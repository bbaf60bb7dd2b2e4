//! Error handling for the lyrfind application
//!
//! This module provides a hierarchical error system with proper error handling
//! and user-friendly error messages. All errors are typed and can be handled
//! appropriately by different parts of the application.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LyrfindError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Failures while talking to the upstream lyrics API. These are terminal:
/// a failed fetch is reported to the caller and never retried.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned status {status}")]
    Status { status: reqwest::StatusCode },

    #[error("Provider response invalid: {reason}")]
    InvalidResponse { reason: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

pub type Result<T> = std::result::Result<T, LyrfindError>;

impl From<toml::de::Error> for LyrfindError {
    fn from(err: toml::de::Error) -> Self {
        LyrfindError::Config(ConfigError::InvalidFormat(err))
    }
}

impl From<serde_json::Error> for LyrfindError {
    fn from(err: serde_json::Error) -> Self {
        LyrfindError::Internal(err.into())
    }
}

impl From<toml::ser::Error> for LyrfindError {
    fn from(err: toml::ser::Error) -> Self {
        LyrfindError::Internal(err.into())
    }
}
