//! Error types for kasweb-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kasweb_core::{CoreError, ErrorCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Internal server error")]
    InternalError,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The client-facing error message, without the status prefix
    fn message(&self) -> String {
        match self {
            ApiError::NotFound { resource } => resource.clone(),
            ApiError::BadRequest { message } => message.clone(),
            ApiError::InternalError => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message() }));
        (self.status(), body).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error.code() {
            ErrorCode::ValidationError | ErrorCode::InvalidId => ApiError::BadRequest {
                message: error.to_string(),
            },
            ErrorCode::TransactionNotFound => ApiError::NotFound {
                resource: error.to_string(),
            },
            _ => {
                log::error!("internal failure: {}", error.to_details());
                ApiError::InternalError
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_bad_request() {
        let err: ApiError = CoreError::ValidationError {
            message: "All fields are required".to_string(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "All fields are required");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err: ApiError = CoreError::TransactionNotFound {
            id: "0123456789abcdef01234567".to_string(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Transaction not found");
    }

    #[test]
    fn test_invalid_id_maps_to_bad_request() {
        let err: ApiError = CoreError::InvalidId {
            id: "nope".to_string(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Invalid transaction ID");
    }

    #[test]
    fn test_store_error_maps_to_internal() {
        let err: ApiError = CoreError::StoreError {
            message: "disk full".to_string(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Internal server error");
    }
}
