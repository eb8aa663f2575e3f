//! Error types for kasweb-store

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreErrorCode {
    /// Identifier does not match the store's id format
    InvalidId,
    /// No document matches the identifier
    NotFound,
    /// IO error
    IoError,
    /// Serialization or deserialization failure
    SerializationError,
}

impl std::fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreErrorCode::InvalidId => write!(f, "INVALID_ID"),
            StoreErrorCode::NotFound => write!(f, "NOT_FOUND"),
            StoreErrorCode::IoError => write!(f, "IO_ERROR"),
            StoreErrorCode::SerializationError => write!(f, "SERIALIZATION_ERROR"),
        }
    }
}

/// Severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreErrorSeverity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for StoreErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreErrorSeverity::Debug => write!(f, "debug"),
            StoreErrorSeverity::Info => write!(f, "info"),
            StoreErrorSeverity::Warning => write!(f, "warning"),
            StoreErrorSeverity::Error => write!(f, "error"),
            StoreErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Main error type for kasweb-store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid document id: {id}")]
    InvalidId { id: String },

    #[error("Document not found: {id}")]
    NotFound { id: String },

    #[error("IO error occurred")]
    IoError,

    #[error("Serialization error: {message}")]
    SerializationError { message: String },
}

impl StoreError {
    /// Get the error code
    pub fn code(&self) -> StoreErrorCode {
        match self {
            StoreError::InvalidId { .. } => StoreErrorCode::InvalidId,
            StoreError::NotFound { .. } => StoreErrorCode::NotFound,
            StoreError::IoError => StoreErrorCode::IoError,
            StoreError::SerializationError { .. } => StoreErrorCode::SerializationError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> StoreErrorSeverity {
        match self {
            StoreError::InvalidId { .. } => StoreErrorSeverity::Warning,
            StoreError::NotFound { .. } => StoreErrorSeverity::Warning,
            StoreError::IoError => StoreErrorSeverity::Critical,
            StoreError::SerializationError { .. } => StoreErrorSeverity::Error,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(_error: io::Error) -> Self {
        StoreError::IoError
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        StoreError::SerializationError {
            message: error.to_string(),
        }
    }
}

/// Result type with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
