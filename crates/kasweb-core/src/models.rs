//! Wire-level transaction models and payload validation

use kasweb_store::{DocumentFields, TransactionDocument, TransactionKind};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A transaction as exposed over the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction identifier
    pub id: String,
    /// Transaction date (YYYY-MM-DD format)
    pub date: String,
    /// Transaction description
    pub description: String,
    /// Transaction amount
    pub amount: f64,
    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Transaction category
    pub category: String,
}

impl From<TransactionDocument> for Transaction {
    fn from(doc: TransactionDocument) -> Self {
        Self {
            id: doc.id,
            date: doc.date,
            description: doc.description,
            amount: doc.amount,
            kind: doc.kind,
            category: doc.category,
        }
    }
}

/// Amount as submitted by a client, either a JSON number or a numeric string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountField {
    Number(f64),
    Text(String),
}

impl AmountField {
    /// Coerce the submitted value to a number, if it parses
    fn as_f64(&self) -> Option<f64> {
        match self {
            AmountField::Number(n) => Some(*n),
            AmountField::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

/// Incoming create/update payload. Every field is optional at the
/// deserialization layer so missing fields surface as validation errors
/// rather than deserialization failures.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionPayload {
    pub date: Option<String>,
    pub description: Option<String>,
    pub amount: Option<AmountField>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
}

impl TransactionPayload {
    /// Validate the payload and produce the canonical field set.
    ///
    /// Every field is required and must be non-empty. A zero amount is
    /// rejected like a missing one. Amounts must parse to a finite,
    /// non-negative number.
    pub fn validate(self) -> CoreResult<DocumentFields> {
        let date = self.date.filter(|s| !s.trim().is_empty());
        let description = self.description.filter(|s| !s.trim().is_empty());
        let kind = self.kind.filter(|s| !s.trim().is_empty());
        let category = self.category.filter(|s| !s.trim().is_empty());
        let amount = self.amount.as_ref().and_then(AmountField::as_f64);

        let (date, description, kind, category) = match (date, description, kind, category) {
            (Some(d), Some(de), Some(k), Some(c)) => (d, de, k, c),
            _ => {
                return Err(CoreError::ValidationError {
                    message: "All fields are required".to_string(),
                })
            }
        };

        let amount = match amount {
            Some(a) if a != 0.0 => a,
            _ => {
                return Err(CoreError::ValidationError {
                    message: "All fields are required".to_string(),
                })
            }
        };

        if !amount.is_finite() || amount < 0.0 {
            return Err(CoreError::ValidationError {
                message: "Amount must be a non-negative number".to_string(),
            });
        }

        let kind: TransactionKind = kind
            .parse()
            .map_err(|message| CoreError::ValidationError { message })?;

        Ok(DocumentFields {
            date,
            description,
            amount,
            kind,
            category,
        })
    }
}

/// Totals derived from the full transaction list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of all income amounts
    pub income: f64,
    /// Sum of all expense amounts
    pub expense: f64,
    /// Income minus expense
    pub balance: f64,
}

impl Summary {
    /// Compute totals over a set of transactions
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let income: f64 = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .map(|t| t.amount)
            .sum();
        let expense: f64 = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .map(|t| t.amount)
            .sum();

        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(
        date: &str,
        description: &str,
        amount: AmountField,
        kind: &str,
        category: &str,
    ) -> TransactionPayload {
        TransactionPayload {
            date: Some(date.to_string()),
            description: Some(description.to_string()),
            amount: Some(amount),
            kind: Some(kind.to_string()),
            category: Some(category.to_string()),
        }
    }

    #[test]
    fn test_valid_payload_with_numeric_amount() {
        let fields = payload(
            "2024-01-01",
            "Salary",
            AmountField::Number(5000.0),
            "income",
            "Work",
        )
        .validate()
        .unwrap();

        assert_eq!(fields.amount, 5000.0);
        assert_eq!(fields.kind, TransactionKind::Income);
    }

    #[test]
    fn test_string_amount_is_coerced() {
        let fields = payload(
            "2024-01-01",
            "Groceries",
            AmountField::Text("150.50".to_string()),
            "expense",
            "Food",
        )
        .validate()
        .unwrap();

        assert_eq!(fields.amount, 150.50);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let mut p = payload(
            "2024-01-01",
            "Salary",
            AmountField::Number(100.0),
            "income",
            "Work",
        );
        p.description = None;

        let err = p.validate().unwrap_err();
        assert_eq!(err.to_string(), "All fields are required");
    }

    #[test]
    fn test_empty_string_field_is_rejected() {
        let err = payload(
            "2024-01-01",
            "   ",
            AmountField::Number(100.0),
            "income",
            "Work",
        )
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "All fields are required");
    }

    #[test]
    fn test_zero_amount_is_rejected() {
        let err = payload(
            "2024-01-01",
            "Nothing",
            AmountField::Number(0.0),
            "expense",
            "Misc",
        )
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "All fields are required");
    }

    #[test]
    fn test_non_numeric_amount_is_rejected() {
        let err = payload(
            "2024-01-01",
            "Oops",
            AmountField::Text("lots".to_string()),
            "expense",
            "Misc",
        )
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "All fields are required");
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let err = payload(
            "2024-01-01",
            "Refund",
            AmountField::Number(-50.0),
            "expense",
            "Misc",
        )
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "Amount must be a non-negative number");
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = payload(
            "2024-01-01",
            "Salary",
            AmountField::Number(100.0),
            "transfer",
            "Work",
        )
        .validate()
        .unwrap_err();
        assert!(err.to_string().contains("Invalid transaction type"));
    }

    #[test]
    fn test_transaction_serializes_type_field() {
        let tx = Transaction {
            id: "0123456789abcdef01234567".to_string(),
            date: "2024-01-01".to_string(),
            description: "Salary".to_string(),
            amount: 5000.0,
            kind: TransactionKind::Income,
            category: "Work".to_string(),
        };

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "income");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_summary_totals() {
        let transactions = vec![
            Transaction {
                id: "a".repeat(24),
                date: "2024-01-01".to_string(),
                description: "Salary".to_string(),
                amount: 5000.0,
                kind: TransactionKind::Income,
                category: "Work".to_string(),
            },
            Transaction {
                id: "b".repeat(24),
                date: "2024-01-02".to_string(),
                description: "Rent".to_string(),
                amount: 1500.0,
                kind: TransactionKind::Expense,
                category: "Housing".to_string(),
            },
            Transaction {
                id: "c".repeat(24),
                date: "2024-01-03".to_string(),
                description: "Groceries".to_string(),
                amount: 500.0,
                kind: TransactionKind::Expense,
                category: "Food".to_string(),
            },
        ];

        let summary = Summary::from_transactions(&transactions);
        assert_eq!(summary.income, 5000.0);
        assert_eq!(summary.expense, 2000.0);
        assert_eq!(summary.balance, 3000.0);
    }

    #[test]
    fn test_summary_of_empty_list_is_zero() {
        let summary = Summary::from_transactions(&[]);
        assert_eq!(summary.income, 0.0);
        assert_eq!(summary.expense, 0.0);
        assert_eq!(summary.balance, 0.0);
    }
}
