//! Core transaction logic for kasweb
//!
//! Validation, the transaction service, summary totals and the dashboard
//! derivation all live here, on top of the document store. Nothing in this
//! crate knows about HTTP.

pub mod dashboard;
pub mod error;
pub mod models;
pub mod service;

pub use dashboard::{derive_view, DashboardView, Pagination, TypeFilter};
pub use error::{CoreError, CoreResult, ErrorCode, ErrorDetails, ErrorSeverity};
pub use models::{AmountField, Summary, Transaction, TransactionPayload};
pub use service::TransactionService;
