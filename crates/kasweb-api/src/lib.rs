//! HTTP API server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::transactions: Transaction CRUD, dashboard, summary cards

pub mod error;
pub mod routes;

use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use kasweb_config::Config;
use kasweb_core::TransactionService;
use kasweb_store::JsonFileStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<JsonFileStore>>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::transactions::{
        api_transaction_create, api_transaction_delete, api_transaction_update, api_transactions,
        htmx_summary_cards, htmx_transaction_create_form, htmx_transaction_delete,
        htmx_transaction_delete_confirm, htmx_transaction_edit_form, htmx_transaction_store,
        htmx_transaction_update, htmx_transactions_list, page_dashboard,
    };

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/transactions", get(api_transactions))
        .route("/api/transactions", post(api_transaction_create))
        .route("/api/transactions/:id", put(api_transaction_update))
        .route("/api/transactions/:id", delete(api_transaction_delete))
        .route("/api/summary", get(api_summary))
        // HTMX page routes
        .route("/", get(page_dashboard))
        // HTMX partial routes
        .route("/summary", get(htmx_summary_cards))
        .route("/transactions/list", get(htmx_transactions_list))
        .route("/transactions/create", get(htmx_transaction_create_form))
        .route("/transactions/:id/edit", get(htmx_transaction_edit_form))
        .route(
            "/transactions/:id/delete",
            get(htmx_transaction_delete_confirm),
        )
        // Form mutation routes
        .route("/transactions", post(htmx_transaction_store))
        .route("/transactions/:id", put(htmx_transaction_update))
        .route("/transactions/:id", delete(htmx_transaction_delete))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Get financial summary (JSON API)
async fn api_summary(state: axum::extract::State<AppState>) -> Json<kasweb_core::Summary> {
    let store = state.store.read().await;
    Json(TransactionService::summary(&store))
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="id">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Kasweb</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .modal-backdrop {{ position: fixed; inset: 0; background: rgba(0,0,0,0.5); z-index: 40; }}
        .modal-panel {{ position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; z-index: 50; pointer-events: none; }}
        .modal-panel > div {{ pointer-events: auto; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        title, content
    )
}

/// Check if request is from HTMX (partial page update)
fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(headers: &axum::http::HeaderMap, title: &str, inner_content: &str) -> String {
    if is_htmx_request(headers) {
        inner_content.to_string()
    } else {
        base_html(title, inner_content)
    }
}

/// Start the HTTP server
///
/// Creates the router, binds to the configured address, and serves
/// requests until the process is stopped.
pub async fn start_server(
    config: Config,
    store: Arc<RwLock<JsonFileStore>>,
) -> std::io::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { store, config };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting Kasweb server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - / (Dashboard)");
    log::info!("  - /api/transactions (Transaction CRUD)");
    log::info!("  - /api/summary (Totals)");
    log::info!("  - /api/health (Health check)");

    axum::serve(listener, router).await
}
