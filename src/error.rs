//! Error types for acco-sync
//!
//! This module defines the error hierarchy for the whole job.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Errors fall into three groups:
//! - configuration errors, raised before any network activity
//! - transport errors, raised while fetching a page (fatal for the run)
//! - mapping errors, raised for a single record (absorbed by the driver)

use thiserror::Error;

/// The main error type for acco-sync
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Invalid header declaration in '{variable}': {message}")]
    InvalidHeader { variable: String, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to map record '{record}': {message}")]
    Mapping { record: String, message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

/// Broad category of an error, used to decide whether a run can continue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad configuration, detected before any request is made
    Configuration,
    /// Network, status or response decoding failure
    Transport,
    /// A single record could not be projected
    Mapping,
    /// Local I/O failure
    Internal,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid header declaration error
    pub fn invalid_header(variable: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            variable: variable.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a mapping error for one record
    pub fn mapping(record: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Mapping {
            record: record.into(),
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config { .. }
            | Error::MissingConfigField { .. }
            | Error::InvalidConfigValue { .. }
            | Error::InvalidHeader { .. }
            | Error::InvalidUrl(_)
            | Error::FileNotFound { .. } => ErrorKind::Configuration,
            Error::Http(_) | Error::HttpStatus { .. } | Error::Decode { .. } => {
                ErrorKind::Transport
            }
            // serde_json reports a failed write to its destination as an I/O error
            Error::JsonParse(e) if e.is_io() => ErrorKind::Internal,
            Error::Mapping { .. } | Error::JsonParse(_) => ErrorKind::Mapping,
            Error::Io(_) => ErrorKind::Internal,
        }
    }

    /// Check if this error must stop the run
    ///
    /// Only mapping errors are absorbed at the record boundary.
    pub fn is_fatal(&self) -> bool {
        self.kind() != ErrorKind::Mapping
    }
}

/// Result type alias for acco-sync
pub type Result<T> = std::result::Result<T, Error>;
