//! Error types for kasweb-core
//!
//! This module provides error handling for the core transaction
//! functionality, including error codes, detailed messages, and suggestions.

use kasweb_store::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request payload failed validation
    ValidationError,
    /// Malformed transaction id
    InvalidId,
    /// Transaction not found
    TransactionNotFound,
    /// Underlying store failure
    StoreError,
    /// Internal error
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::ValidationError => write!(f, "VALIDATION_ERROR"),
            ErrorCode::InvalidId => write!(f, "INVALID_ID"),
            ErrorCode::TransactionNotFound => write!(f, "TRANSACTION_NOT_FOUND"),
            ErrorCode::StoreError => write!(f, "STORE_ERROR"),
            ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Informational
    Info,
    /// Warning - operation may be affected
    Warning,
    /// Error - operation failed
    Error,
    /// Critical - application may be unstable
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
            ErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            suggestions: vec![],
        }
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Main error type for kasweb-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{message}")]
    ValidationError { message: String },

    #[error("Invalid transaction ID")]
    InvalidId { id: String },

    #[error("Transaction not found")]
    TransactionNotFound { id: String },

    #[error("Store error: {message}")]
    StoreError { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::ValidationError { .. } => ErrorCode::ValidationError,
            CoreError::InvalidId { .. } => ErrorCode::InvalidId,
            CoreError::TransactionNotFound { .. } => ErrorCode::TransactionNotFound,
            CoreError::StoreError { .. } => ErrorCode::StoreError,
            CoreError::InternalError { .. } => ErrorCode::InternalError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::ValidationError { .. } => ErrorSeverity::Warning,
            CoreError::InvalidId { .. } => ErrorSeverity::Info,
            CoreError::TransactionNotFound { .. } => ErrorSeverity::Info,
            CoreError::StoreError { .. } => ErrorSeverity::Error,
            CoreError::InternalError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::ValidationError { .. } => {
                details = details.with_suggestion(
                    "Provide date, description, amount, type and category.".to_string(),
                );
            }
            CoreError::InvalidId { id } => {
                details = details.with_suggestion(format!(
                    "The identifier '{}' is not a valid transaction ID.",
                    id
                ));
            }
            CoreError::TransactionNotFound { .. } => {
                details = details.with_suggestion(
                    "Use the /api/transactions endpoint to list all transactions.".to_string(),
                );
            }
            _ => {}
        }

        details
    }
}

impl From<StoreError> for CoreError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::InvalidId { id } => CoreError::InvalidId { id },
            StoreError::NotFound { id } => CoreError::TransactionNotFound { id },
            other => CoreError::StoreError {
                message: other.to_string(),
            },
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::ValidationError.to_string(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::InvalidId.to_string(), "INVALID_ID");
        assert_eq!(
            ErrorCode::TransactionNotFound.to_string(),
            "TRANSACTION_NOT_FOUND"
        );
    }

    #[test]
    fn test_error_severity_display() {
        assert_eq!(ErrorSeverity::Info.to_string(), "info");
        assert_eq!(ErrorSeverity::Warning.to_string(), "warning");
        assert_eq!(ErrorSeverity::Critical.to_string(), "critical");
    }

    #[test]
    fn test_core_error_code() {
        let error = CoreError::TransactionNotFound {
            id: "abc".to_string(),
        };
        assert_eq!(error.code(), ErrorCode::TransactionNotFound);

        let error = CoreError::ValidationError {
            message: "All fields are required".to_string(),
        };
        assert_eq!(error.code(), ErrorCode::ValidationError);
    }

    #[test]
    fn test_core_error_severity() {
        let error = CoreError::ValidationError {
            message: "test".to_string(),
        };
        assert_eq!(error.severity(), ErrorSeverity::Warning);

        let error = CoreError::InternalError {
            message: "test".to_string(),
        };
        assert_eq!(error.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_store_error_conversion() {
        let error: CoreError = StoreError::NotFound {
            id: "0123456789abcdef01234567".to_string(),
        }
        .into();
        assert_eq!(error.code(), ErrorCode::TransactionNotFound);

        let error: CoreError = StoreError::InvalidId {
            id: "nope".to_string(),
        }
        .into();
        assert_eq!(error.code(), ErrorCode::InvalidId);

        let error: CoreError = StoreError::IoError.into();
        assert_eq!(error.code(), ErrorCode::StoreError);
    }

    #[test]
    fn test_error_details_not_found() {
        let error = CoreError::TransactionNotFound {
            id: "0123456789abcdef01234567".to_string(),
        };
        let details = error.to_details();

        assert_eq!(details.code, ErrorCode::TransactionNotFound);
        assert!(!details.suggestions.is_empty());
    }
}
