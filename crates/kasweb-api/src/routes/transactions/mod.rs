//! Transaction routes - CRUD, dashboard, filtering and pagination
//!
//! Structure:
//! - api.rs: JSON API endpoints
//! - page.rs: Dashboard page and HTMX fragments

pub mod api;
pub mod page;

pub use api::{
    api_transaction_create,
    api_transaction_delete,
    api_transaction_update,
    api_transactions,
};

pub use page::{
    htmx_summary_cards,
    htmx_transaction_create_form,
    htmx_transaction_delete,
    htmx_transaction_delete_confirm,
    htmx_transaction_edit_form,
    htmx_transaction_store,
    htmx_transaction_update,
    htmx_transactions_list,
    page_dashboard,
};
