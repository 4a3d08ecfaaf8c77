//! Error types for SetKit
//!
//! Configuration chains never fail. These errors only come from loading
//! configuration and installing the logging subscriber.

use thiserror::Error;

/// Main error type for SetKit operations
#[derive(Debug, Error)]
pub enum SetKitError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Initialization error: {message}")]
    Initialization { message: String },

    #[error("Failed to parse {format} configuration: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SetKitError {
    /// Create a configuration error from a string
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration {
            message: msg.into(),
        }
    }

    /// Create an initialization error from a string
    pub fn initialization<S: Into<String>>(msg: S) -> Self {
        Self::Initialization {
            message: msg.into(),
        }
    }

    /// Create a parse error for the given format
    pub fn parse<S: Into<String>>(format: &'static str, msg: S) -> Self {
        Self::Parse {
            format,
            message: msg.into(),
        }
    }
}

impl From<ron::error::SpannedError> for SetKitError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::parse("RON", err.to_string())
    }
}

impl From<serde_json::Error> for SetKitError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse("JSON", err.to_string())
    }
}

/// Result type alias for SetKit operations
pub type Result<T> = std::result::Result<T, SetKitError>;
