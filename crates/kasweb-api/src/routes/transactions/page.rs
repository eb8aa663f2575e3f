//! Dashboard page and HTMX fragments
//!
//! The dashboard is a single page: summary cards, filter buttons, the
//! transaction list with pagination, and a modal container. Everything
//! below the page shell is an HTMX fragment that re-renders on demand.
//! Mutations return a result fragment whose script closes the modal and
//! refreshes the summary and the list.

use crate::error::ApiError;
use crate::{page_response, AppState};
use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::Form;
use kasweb_config::CurrencyConfig;
use kasweb_core::{
    derive_view, AmountField, DashboardView, Summary, Transaction, TransactionPayload,
    TransactionService, TypeFilter,
};
use kasweb_store::TransactionKind;
use kasweb_utils::{escape_html, format_currency};
use serde::Deserialize;
use std::collections::HashMap;

/// Form fields submitted by the add/edit modals
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub category: String,
}

impl TransactionForm {
    fn into_payload(self) -> TransactionPayload {
        TransactionPayload {
            date: Some(self.date),
            description: Some(self.description),
            amount: Some(AmountField::Text(self.amount)),
            kind: Some(self.kind),
            category: Some(self.category),
        }
    }
}

fn list_params(params: &HashMap<String, String>) -> (TypeFilter, usize) {
    let filter = params
        .get("filter")
        .map(|s| TypeFilter::parse(s))
        .unwrap_or_default();
    let page = params
        .get("page")
        .and_then(|s| s.parse().ok())
        .unwrap_or(1);
    (filter, page)
}

fn money(currency: &CurrencyConfig, value: f64) -> String {
    format_currency(
        value,
        &currency.symbol,
        &currency.thousands_separator,
        currency.decimal_places,
    )
}

/// Render a stored date for display, dd/mm/yyyy
fn format_date_id(date: &str) -> String {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

// ==================== Page ====================

/// Dashboard page
pub async fn page_dashboard(
    State(state): State<AppState>,
    headers: axum::http::HeaderMap,
) -> Html<String> {
    let store = state.store.read().await;
    let view = derive_view(
        &TransactionService::list(&store),
        TypeFilter::All,
        1,
        state.config.pagination.items_per_page,
    );
    drop(store);

    let inner_content = format!(
        r#"<div class='max-w-5xl mx-auto px-4 py-8'>
    <div class='mb-8'>
        <h1 class='text-3xl font-bold text-gray-900 mb-2'>Pencatatan Keuangan Harian</h1>
        <p class='text-gray-600'>Kelola pemasukan dan pengeluaran Anda dengan mudah</p>
    </div>
    <div id='summary-cards'>{}</div>
    <div class='bg-white rounded-lg shadow-lg p-6'>
        <div class='flex items-center justify-between mb-6'>
            <h2 class='text-xl font-semibold text-gray-900'>Riwayat Transaksi</h2>
            <button hx-get='/transactions/create' hx-target='#modal' hx-swap='innerHTML'
                class='flex items-center gap-2 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700'>
                + Tambah Transaksi
            </button>
        </div>
        <div id='transaction-list'>{}</div>
    </div>
</div>
<div id='modal'></div>
<script>
function closeModal() {{
    document.getElementById('modal').innerHTML = '';
}}
function refreshSummary() {{
    htmx.ajax('GET', '/summary', {{target: '#summary-cards'}});
}}
function refreshList(page) {{
    var inner = document.querySelector('#transaction-list [data-filter]');
    var filter = inner ? inner.getAttribute('data-filter') : 'all';
    if (!page) {{ page = inner ? inner.getAttribute('data-page') : 1; }}
    htmx.ajax('GET', '/transactions/list?filter=' + filter + '&page=' + page,
        {{target: '#transaction-list'}});
}}
</script>"#,
        render_summary_cards(&view.summary, &state.config.currency),
        render_list(&view, &state.config.currency),
    );

    Html(page_response(&headers, "Dasbor", &inner_content))
}

// ==================== Fragments ====================

/// HTMX: Summary cards - Partial update
pub async fn htmx_summary_cards(State(state): State<AppState>) -> Html<String> {
    let store = state.store.read().await;
    let summary = TransactionService::summary(&store);
    Html(render_summary_cards(&summary, &state.config.currency))
}

/// HTMX: Transaction list with filter and pagination - Partial update
pub async fn htmx_transactions_list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let (filter, page) = list_params(&params);
    let store = state.store.read().await;
    let view = derive_view(
        &TransactionService::list(&store),
        filter,
        page,
        state.config.pagination.items_per_page,
    );
    Html(render_list(&view, &state.config.currency))
}

fn render_summary_cards(summary: &Summary, currency: &CurrencyConfig) -> String {
    let card = |title: &str, amount: f64, bg: &str, border: &str, text: &str| {
        format!(
            r#"<div class='rounded-lg border-2 p-4 {} {}'>
    <p class='text-sm text-gray-600 mb-1'>{}</p>
    <p class='text-2xl font-bold {}'>{}</p>
</div>"#,
            bg,
            border,
            title,
            text,
            money(currency, amount)
        )
    };

    format!(
        r#"<div class='grid grid-cols-1 md:grid-cols-3 gap-4 mb-8'>
    {}
    {}
    {}
</div>"#,
        card(
            "Total Pemasukan",
            summary.income,
            "bg-green-50",
            "border-green-200",
            "text-green-600"
        ),
        card(
            "Total Pengeluaran",
            summary.expense,
            "bg-red-50",
            "border-red-200",
            "text-red-600"
        ),
        card(
            "Saldo",
            summary.balance,
            "bg-blue-50",
            "border-blue-200",
            "text-blue-600"
        ),
    )
}

fn render_filter_buttons(active: TypeFilter) -> String {
    let filters = [
        (TypeFilter::All, "Semua", "bg-blue-600"),
        (TypeFilter::Income, "Pemasukan", "bg-green-600"),
        (TypeFilter::Expense, "Pengeluaran", "bg-red-600"),
    ];

    let mut html = String::from("<div class='flex gap-2 flex-wrap mb-6'>");
    for (value, label, active_color) in &filters {
        let class = if *value == active {
            format!("{} text-white shadow-md", active_color)
        } else {
            "bg-gray-100 text-gray-700 hover:bg-gray-200".to_string()
        };
        // filter change always resets to page 1
        html.push_str(&format!(
            r#"<button hx-get='/transactions/list?filter={}&page=1' hx-target='#transaction-list' hx-swap='innerHTML'
    class='px-4 py-2 rounded-lg font-medium transition-all {}'>{}</button>"#,
            value, class, label
        ));
    }
    html.push_str("</div>");
    html
}

fn render_list(view: &DashboardView, currency: &CurrencyConfig) -> String {
    let mut html = format!(
        r#"<div data-filter='{}' data-page='{}'>{}"#,
        view.filter,
        view.pagination.page,
        render_filter_buttons(view.filter)
    );

    if view.items.is_empty() {
        html.push_str(
            r#"<div class='text-center py-12 text-gray-500'><p>Belum ada transaksi</p></div>"#,
        );
    } else {
        html.push_str("<div class='space-y-3'>");
        for tx in &view.items {
            html.push_str(&render_list_item(tx, view, currency));
        }
        html.push_str("</div>");
        html.push_str(&render_pagination(view));
    }

    html.push_str("</div>");
    html
}

fn render_list_item(tx: &Transaction, view: &DashboardView, currency: &CurrencyConfig) -> String {
    let (sign, amount_color) = match tx.kind {
        TransactionKind::Income => ("+", "text-green-600"),
        TransactionKind::Expense => ("-", "text-red-600"),
    };

    format!(
        r#"<div class='flex items-center justify-between border rounded-lg p-4 hover:bg-gray-50'>
    <div class='flex-1 min-w-0'>
        <div class='text-sm text-gray-500'>{}</div>
        <div class='font-medium truncate'>{}</div>
        <span class='inline-block mt-1 px-2 py-0.5 text-xs rounded-full bg-gray-100 text-gray-600'>{}</span>
    </div>
    <div class='flex items-center gap-3 flex-shrink-0'>
        <span class='font-semibold {}'>{} {}</span>
        <button hx-get='/transactions/{}/edit' hx-target='#modal' hx-swap='innerHTML'
            class='px-3 py-1 text-sm border rounded-lg hover:bg-gray-100'>Edit</button>
        <button hx-get='/transactions/{}/delete?filter={}&page={}' hx-target='#modal' hx-swap='innerHTML'
            class='px-3 py-1 text-sm border border-red-200 text-red-600 rounded-lg hover:bg-red-50'>Hapus</button>
    </div>
</div>"#,
        format_date_id(&tx.date),
        escape_html(&tx.description),
        escape_html(&tx.category),
        amount_color,
        sign,
        money(currency, tx.amount),
        tx.id,
        tx.id,
        view.filter,
        view.pagination.page,
    )
}

fn render_pagination(view: &DashboardView) -> String {
    let p = &view.pagination;
    if p.total_pages <= 1 {
        return String::new();
    }

    let nav_button = |label: &str, page: usize, enabled: bool| {
        if enabled {
            format!(
                r#"<button hx-get='/transactions/list?filter={}&page={}' hx-target='#transaction-list' hx-swap='innerHTML'
    class='px-3 py-1 border rounded hover:bg-gray-100'>{}</button>"#,
                view.filter, page, label
            )
        } else {
            format!(
                r#"<button disabled class='px-3 py-1 border rounded opacity-50 cursor-not-allowed'>{}</button>"#,
                label
            )
        }
    };

    format!(
        r#"<div class='mt-6 flex items-center justify-between flex-wrap gap-4'>
    <span class='text-sm text-gray-500'>Halaman {} dari {}</span>
    <div class='flex items-center gap-2'>
        {}
        {}
    </div>
</div>"#,
        p.page,
        p.total_pages,
        nav_button("Sebelumnya", p.page.saturating_sub(1), p.has_previous()),
        nav_button("Berikutnya", p.page + 1, p.has_next()),
    )
}

// ==================== Modals ====================

fn modal_shell(title: &str, body: &str) -> String {
    format!(
        r#"<div class='modal-backdrop' onclick='closeModal()'></div>
<div class='modal-panel'>
    <div class='bg-white rounded-lg shadow-xl w-full max-w-md p-6'>
        <div class='flex items-center justify-between mb-4'>
            <h3 class='text-lg font-semibold'>{}</h3>
            <button onclick='closeModal()' class='text-gray-400 hover:text-gray-600'>&times;</button>
        </div>
        {}
    </div>
</div>"#,
        title, body
    )
}

fn transaction_form_fields(tx: Option<&Transaction>) -> String {
    let (date, description, amount, category) = match tx {
        Some(tx) => (
            tx.date.clone(),
            escape_html(&tx.description),
            if tx.amount.fract() == 0.0 {
                format!("{}", tx.amount as i64)
            } else {
                tx.amount.to_string()
            },
            escape_html(&tx.category),
        ),
        None => (String::new(), String::new(), String::new(), String::new()),
    };
    let kind = tx.map(|t| t.kind).unwrap_or(TransactionKind::Expense);

    format!(
        r#"<div class='space-y-4'>
    <div>
        <label class='block text-sm font-medium text-gray-700 mb-1'>Tanggal</label>
        <input type='date' name='date' value='{}' required
            class='w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500'>
    </div>
    <div>
        <label class='block text-sm font-medium text-gray-700 mb-1'>Deskripsi</label>
        <input type='text' name='description' value='{}' required
            class='w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500'>
    </div>
    <div>
        <label class='block text-sm font-medium text-gray-700 mb-1'>Jumlah (Rp)</label>
        <input type='number' name='amount' value='{}' min='0' step='0.01' required
            class='w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500'>
    </div>
    <div>
        <label class='block text-sm font-medium text-gray-700 mb-1'>Tipe</label>
        <select name='type' class='w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500'>
            <option value='expense' {}>Pengeluaran</option>
            <option value='income' {}>Pemasukan</option>
        </select>
    </div>
    <div>
        <label class='block text-sm font-medium text-gray-700 mb-1'>Kategori</label>
        <input type='text' name='category' value='{}' required
            class='w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500'>
    </div>
</div>"#,
        date,
        description,
        amount,
        if kind == TransactionKind::Expense { "selected" } else { "" },
        if kind == TransactionKind::Income { "selected" } else { "" },
        category,
    )
}

/// HTMX: Add transaction modal
pub async fn htmx_transaction_create_form() -> Html<String> {
    let body = format!(
        r#"<form hx-post='/transactions' hx-target='#form-result' hx-swap='innerHTML'>
    {}
    <div class='flex gap-2 pt-4'>
        <button type='button' onclick='closeModal()'
            class='flex-1 px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50 text-gray-700'>Batal</button>
        <button type='submit'
            class='flex-1 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700'>Simpan</button>
    </div>
</form>
<div id='form-result' class='mt-4'></div>"#,
        transaction_form_fields(None)
    );

    Html(modal_shell("Tambah Transaksi", &body))
}

/// HTMX: Edit transaction modal
pub async fn htmx_transaction_edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let store = state.store.read().await;
    let tx = TransactionService::get(&store, &id)?;
    drop(store);

    let body = format!(
        r#"<form hx-put='/transactions/{}' hx-target='#form-result' hx-swap='innerHTML'>
    {}
    <div class='flex gap-2 pt-4'>
        <button type='button' onclick='closeModal()'
            class='flex-1 px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50 text-gray-700'>Batal</button>
        <button type='submit'
            class='flex-1 px-4 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700'>Simpan</button>
    </div>
</form>
<div id='form-result' class='mt-4'></div>"#,
        tx.id,
        transaction_form_fields(Some(&tx))
    );

    Ok(Html(modal_shell("Edit Transaksi", &body)))
}

/// HTMX: Delete confirmation modal
pub async fn htmx_transaction_delete_confirm(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, ApiError> {
    let (filter, page) = list_params(&params);
    let store = state.store.read().await;
    let tx = TransactionService::get(&store, &id)?;
    drop(store);

    let (sign, amount_color) = match tx.kind {
        TransactionKind::Income => ("+", "text-green-600"),
        TransactionKind::Expense => ("-", "text-red-600"),
    };

    let body = format!(
        r#"<p class='text-gray-700 mb-4'>Apakah Anda yakin ingin menghapus transaksi ini?</p>
<div class='bg-gray-50 rounded-lg p-4 space-y-2 mb-4'>
    <div class='flex justify-between'>
        <span class='text-sm text-gray-600'>Tanggal:</span>
        <span class='text-sm font-medium'>{}</span>
    </div>
    <div class='flex justify-between'>
        <span class='text-sm text-gray-600'>Deskripsi:</span>
        <span class='text-sm font-medium'>{}</span>
    </div>
    <div class='flex justify-between'>
        <span class='text-sm text-gray-600'>Jumlah:</span>
        <span class='text-sm font-medium {}'>{} {}</span>
    </div>
</div>
<div class='flex gap-2'>
    <button type='button' onclick='closeModal()'
        class='flex-1 px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50 text-gray-700'>Batal</button>
    <button hx-delete='/transactions/{}?filter={}&page={}' hx-target='#form-result' hx-swap='innerHTML'
        class='flex-1 px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700'>Hapus</button>
</div>
<div id='form-result' class='mt-4'></div>"#,
        format_date_id(&tx.date),
        escape_html(&tx.description),
        amount_color,
        sign,
        money(&state.config.currency, tx.amount),
        tx.id,
        filter,
        page,
    );

    Ok(Html(modal_shell("Konfirmasi Hapus", &body)))
}

// ==================== Mutations ====================

fn error_fragment(message: &str) -> String {
    format!(
        r#"<div class='bg-red-50 border border-red-200 rounded-lg p-3'>
    <p class='text-sm text-red-600'>{}</p>
</div>"#,
        escape_html(message)
    )
}

fn success_fragment(message: &str, list_page: Option<usize>) -> String {
    let refresh = match list_page {
        Some(page) => format!("refreshList({})", page),
        // no page given, stay where the user was
        None => "refreshList()".to_string(),
    };
    format!(
        r#"<div class='bg-green-50 border border-green-200 rounded-lg p-3'>
    <p class='text-sm text-green-600'>{}</p>
</div>
<script>closeModal(); refreshSummary(); {};</script>"#,
        message, refresh
    )
}

/// Store a new transaction (form submission)
pub async fn htmx_transaction_store(
    State(state): State<AppState>,
    Form(form): Form<TransactionForm>,
) -> Html<String> {
    let mut store = state.store.write().await;
    match TransactionService::create(&mut store, form.into_payload()).await {
        // new transactions always land on the first page
        Ok(_) => Html(success_fragment("Transaksi berhasil ditambahkan", Some(1))),
        Err(e) => Html(error_fragment(&e.to_string())),
    }
}

/// Apply an edit to an existing transaction (form submission)
pub async fn htmx_transaction_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<TransactionForm>,
) -> Html<String> {
    let mut store = state.store.write().await;
    match TransactionService::update(&mut store, &id, form.into_payload()).await {
        Ok(_) => Html(success_fragment("Transaksi berhasil diperbarui", None)),
        Err(e) => Html(error_fragment(&e.to_string())),
    }
}

/// Delete a transaction (confirmation submission).
///
/// The confirmed page is re-derived against the post-delete filtered
/// count, so deleting the last item of the last page moves the view back
/// instead of showing an empty page.
pub async fn htmx_transaction_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let (filter, page) = list_params(&params);
    let mut store = state.store.write().await;
    match TransactionService::delete(&mut store, &id).await {
        Ok(()) => {
            let remaining = TransactionService::list(&store)
                .iter()
                .filter(|t| filter.matches(t))
                .count();
            let clamped = kasweb_core::Pagination::clamped(
                page,
                state.config.pagination.items_per_page,
                remaining,
            )
            .page;
            Html(success_fragment("Transaksi berhasil dihapus", Some(clamped)))
        }
        Err(e) => Html(error_fragment(&e.to_string())),
    }
}
