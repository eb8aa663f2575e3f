//! Transactions JSON API endpoints
//!
//! Endpoints:
//! - api_transactions: Get all transactions (JSON)
//! - api_transaction_create: Store a new transaction
//! - api_transaction_update: Replace an existing transaction
//! - api_transaction_delete: Remove a transaction

use crate::error::ApiError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use kasweb_core::{Transaction, TransactionPayload, TransactionService};

/// Parse a request body into a payload, tolerating mistyped fields.
///
/// Anything that does not deserialize cleanly is a client error, matching
/// the 400 that missing fields produce.
fn parse_payload(body: serde_json::Value) -> Result<TransactionPayload, ApiError> {
    serde_json::from_value(body).map_err(|_| ApiError::BadRequest {
        message: "All fields are required".to_string(),
    })
}

/// Get all transactions, newest date first (JSON API)
pub async fn api_transactions(state: State<AppState>) -> Json<Vec<Transaction>> {
    let store = state.store.read().await;
    Json(TransactionService::list(&store))
}

/// Create a new transaction (JSON API)
pub async fn api_transaction_create(
    state: State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let payload = parse_payload(body)?;
    let mut store = state.store.write().await;
    let created = TransactionService::create(&mut store, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing transaction (JSON API)
pub async fn api_transaction_update(
    state: State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<Transaction>, ApiError> {
    let payload = parse_payload(body)?;
    let mut store = state.store.write().await;
    let updated = TransactionService::update(&mut store, &id, payload).await?;
    Ok(Json(updated))
}

/// Delete a transaction (JSON API)
pub async fn api_transaction_delete(
    state: State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut store = state.store.write().await;
    TransactionService::delete(&mut store, &id).await?;
    Ok(Json(serde_json::json!({
        "message": "Transaction deleted successfully"
    })))
}
