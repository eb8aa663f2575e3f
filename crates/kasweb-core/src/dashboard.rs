//! Dashboard derivation logic
//!
//! The dashboard is a pure function of the full transaction list plus two
//! pieces of view state: the active type filter and the current page.
//! Summary totals always cover the unfiltered list; filtering and
//! pagination only shape the visible slice.

use serde::{Deserialize, Serialize};

use crate::models::{Summary, Transaction};
use kasweb_store::TransactionKind;

/// Type filter applied to the transaction list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    /// Show everything
    #[default]
    All,
    /// Income only
    Income,
    /// Expense only
    Expense,
}

impl TypeFilter {
    /// Parse a filter value from a query parameter.
    ///
    /// Unknown values fall back to showing everything.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "income" => TypeFilter::Income,
            "expense" => TypeFilter::Expense,
            _ => TypeFilter::All,
        }
    }

    /// Whether a transaction passes this filter
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Income => transaction.kind == TransactionKind::Income,
            TypeFilter::Expense => transaction.kind == TransactionKind::Expense,
        }
    }
}

impl std::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeFilter::All => write!(f, "all"),
            TypeFilter::Income => write!(f, "income"),
            TypeFilter::Expense => write!(f, "expense"),
        }
    }
}

/// Page window over a filtered transaction list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page, 1-based
    pub page: usize,
    /// Items per page
    pub per_page: usize,
    /// Number of items after filtering
    pub total_items: usize,
    /// Number of pages after filtering
    pub total_pages: usize,
}

impl Pagination {
    /// Build a page window, clamping the requested page into range.
    ///
    /// A page past the end lands on the last page. Page 1 is always valid,
    /// even over an empty list.
    pub fn clamped(requested_page: usize, per_page: usize, total_items: usize) -> Self {
        let total_pages = total_items.div_ceil(per_page);
        let page = requested_page.clamp(1, total_pages.max(1));
        Self {
            page,
            per_page,
            total_items,
            total_pages,
        }
    }

    /// Whether there is a page before the current one
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether there is a page after the current one
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Everything a dashboard render needs
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// Totals over the unfiltered list
    pub summary: Summary,
    /// Active type filter
    pub filter: TypeFilter,
    /// The visible page of filtered transactions
    pub items: Vec<Transaction>,
    /// Page window
    pub pagination: Pagination,
}

/// Derive a dashboard view from the full transaction list.
///
/// `transactions` is expected in display order (date descending). The
/// summary covers all of it; `filter` and `page` shape the visible slice.
pub fn derive_view(
    transactions: &[Transaction],
    filter: TypeFilter,
    page: usize,
    per_page: usize,
) -> DashboardView {
    let summary = Summary::from_transactions(transactions);

    let filtered: Vec<Transaction> = transactions
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();

    let pagination = Pagination::clamped(page, per_page, filtered.len());
    let start = (pagination.page - 1) * per_page;
    let items = filtered
        .into_iter()
        .skip(start)
        .take(per_page)
        .collect();

    DashboardView {
        summary,
        filter,
        items,
        pagination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(date: &str, amount: f64, kind: TransactionKind) -> Transaction {
        Transaction {
            id: "0123456789abcdef01234567".to_string(),
            date: date.to_string(),
            description: "test".to_string(),
            amount,
            kind,
            category: "General".to_string(),
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx("2024-01-07", 700.0, TransactionKind::Income),
            tx("2024-01-06", 600.0, TransactionKind::Expense),
            tx("2024-01-05", 500.0, TransactionKind::Income),
            tx("2024-01-04", 400.0, TransactionKind::Expense),
            tx("2024-01-03", 300.0, TransactionKind::Income),
            tx("2024-01-02", 200.0, TransactionKind::Expense),
            tx("2024-01-01", 100.0, TransactionKind::Income),
        ]
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(TypeFilter::parse("income"), TypeFilter::Income);
        assert_eq!(TypeFilter::parse("EXPENSE"), TypeFilter::Expense);
        assert_eq!(TypeFilter::parse("all"), TypeFilter::All);
        assert_eq!(TypeFilter::parse("garbage"), TypeFilter::All);
    }

    #[test]
    fn test_summary_ignores_filter() {
        let view = derive_view(&sample(), TypeFilter::Expense, 1, 5);
        assert_eq!(view.summary.income, 1600.0);
        assert_eq!(view.summary.expense, 1200.0);
        assert_eq!(view.summary.balance, 400.0);
    }

    #[test]
    fn test_first_page_of_all() {
        let view = derive_view(&sample(), TypeFilter::All, 1, 5);
        assert_eq!(view.items.len(), 5);
        assert_eq!(view.items[0].date, "2024-01-07");
        assert_eq!(view.pagination.total_pages, 2);
        assert!(view.pagination.has_next());
        assert!(!view.pagination.has_previous());
    }

    #[test]
    fn test_second_page_holds_remainder() {
        let view = derive_view(&sample(), TypeFilter::All, 2, 5);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].date, "2024-01-02");
        assert!(!view.pagination.has_next());
    }

    #[test]
    fn test_filter_changes_page_count() {
        let view = derive_view(&sample(), TypeFilter::Income, 1, 5);
        assert_eq!(view.items.len(), 4);
        assert_eq!(view.pagination.total_pages, 1);
        assert!(view.items.iter().all(|t| t.kind == TransactionKind::Income));
    }

    #[test]
    fn test_page_past_end_is_clamped_to_last() {
        let view = derive_view(&sample(), TypeFilter::All, 99, 5);
        assert_eq!(view.pagination.page, 2);
        assert_eq!(view.items.len(), 2);
    }

    #[test]
    fn test_page_zero_is_clamped_to_first() {
        let view = derive_view(&sample(), TypeFilter::All, 0, 5);
        assert_eq!(view.pagination.page, 1);
    }

    #[test]
    fn test_empty_list() {
        let view = derive_view(&[], TypeFilter::All, 1, 5);
        assert_eq!(view.pagination.page, 1);
        assert_eq!(view.pagination.total_pages, 0);
        assert!(view.items.is_empty());
        assert_eq!(view.summary.balance, 0.0);
    }

    #[test]
    fn test_exact_multiple_has_no_partial_page() {
        let transactions: Vec<Transaction> = sample().into_iter().take(5).collect();
        let view = derive_view(&transactions, TypeFilter::All, 1, 5);
        assert_eq!(view.pagination.total_pages, 1);
        assert!(!view.pagination.has_next());
    }
}
